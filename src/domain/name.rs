//! Compile-time name tags
//!
//! A name is a zero-sized marker type. Two nodes that differ only by name are
//! different types, which lets structurally identical subtrees fill different
//! roles. The string itself is only ever used for display.

/// Marker type carrying a node name.
pub trait Name: 'static {
    const NAME: &'static str;
}

/// Declares a name tag type.
///
/// ```
/// use treescan::domain::Name;
///
/// treescan::name!(pub Speed = "speed");
/// assert_eq!(Speed::NAME, "speed");
/// ```
#[macro_export]
macro_rules! name {
    ($(#[$meta:meta])* $vis:vis $ident:ident = $label:literal) => {
        $(#[$meta])*
        #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
        $vis struct $ident;

        impl $crate::domain::Name for $ident {
            const NAME: &'static str = $label;
        }
    };
    ($($(#[$meta:meta])* $vis:vis $ident:ident = $label:literal;)+) => {
        $($crate::name!($(#[$meta])* $vis $ident = $label);)+
    };
}
