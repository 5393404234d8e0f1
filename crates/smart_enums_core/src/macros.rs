//! Declaration macro for enum kinds.

/// Declares an enum kind with one named constructor per value.
///
/// The kind name is the marker type's identifier. Each entry reads
/// `constructor = "raw value" => "description"`; entries keep their
/// declared order.
///
/// ```
/// use smart_enums_core::{Enum, smart_enum};
///
/// smart_enum! {
///     /// Lifecycle of an order.
///     pub struct OrderStatus {
///         open = "open" => "Open",
///         shipped = "shipped" => "Shipped",
///     }
/// }
///
/// let open = OrderStatus::open();
/// assert_eq!(open, Enum::<OrderStatus>::from_value("open").unwrap());
/// assert_eq!(open.description(), "Open");
/// ```
#[macro_export]
macro_rules! smart_enum {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$ctor_meta:meta])*
                $ctor:ident = $value:literal => $description:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
        $vis struct $name;

        impl $crate::EnumKind for $name {
            const NAME: &'static str = stringify!($name);
            const VALUES: &'static [(&'static str, &'static str)] = &[
                $( ($value, $description) ),*
            ];
        }

        impl $name {
            $(
                $(#[$ctor_meta])*
                #[must_use]
                $vis fn $ctor() -> $crate::Enum<$name> {
                    const POSITION: $crate::kind::Position<$name> =
                        match $crate::kind::Position::<$name>::of($value) {
                            ::core::option::Option::Some(position) => position,
                            ::core::option::Option::None => ::core::panic!(::core::concat!(
                                "\"",
                                $value,
                                "\" is not declared by ",
                                ::core::stringify!($name)
                            )),
                        };
                    $crate::Enum::<$name>::at(POSITION)
                }
            )*
        }
    };
}
