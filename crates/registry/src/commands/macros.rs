/// Defines an oracle command and its descriptor builder.
///
/// Expands to a `CMD_<name>` static [`CommandDef`](crate::CommandDef) and a
/// private `build_<name>` builder that runs the given [`QueryKind`](crate::QueryKind).
/// `content_types` defaults to Go source, `size` to [`DisplaySize::DEFAULT`](crate::DisplaySize::DEFAULT).
#[macro_export]
macro_rules! command {
	($name:ident, {
		id: $id:expr,
		label: $label:expr,
		tooltip: $tooltip:expr
		$(, key: $key:expr)?
		$(, content_types: $types:expr)?
		$(, size: $size:expr)?
		$(,)?
	}, query: $kind:expr) => {
		paste::paste! {
			#[allow(non_upper_case_globals)]
			pub static [<CMD_ $name>]: $crate::CommandDef = $crate::CommandDef {
				id: $id,
				label: $label,
				tooltip: $tooltip,
				key: $crate::__cmd_opt!($({::core::option::Option::Some($key)})?, ::core::option::Option::None),
				content_types: $crate::__cmd_opt!($({$types})?, &[$crate::GO_CONTENT_TYPE]),
				builder: [<build_ $name>],
			};

			fn [<build_ $name>](
				ctx: &$crate::SelectionContext,
			) -> ::core::result::Result<$crate::QueryDescriptor, $crate::InvalidSelectionError> {
				$kind.describe(ctx, $crate::__cmd_opt!($({$size})?, $crate::DisplaySize::DEFAULT))
			}
		}
	};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __cmd_opt {
	({$val:expr}, $default:expr) => {
		$val
	};
	(, $default:expr) => {
		$default
	};
}
