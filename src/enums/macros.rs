/// Counts a comma-separated list of identifiers in a constant context.
#[doc(hidden)]
#[macro_export]
macro_rules! count_enumerators {
    (@unit $item:ident) => {
        ()
    };
    ($($item:ident),* $(,)?) => {
        <[()]>::len(&[$($crate::count_enumerators!(@unit $item)),*])
    };
}

/// Declares an enumeration whose enumerators take the values 0, 1, 2, ... in
/// the order listed.
///
/// No string table is generated; pair it with
/// [`stringify_enum!`](crate::stringify_enum) or use
/// [`enum_str!`](crate::enum_str) instead. Explicit discriminants are not
/// accepted.
///
/// ```
/// enumstr::define_enum! {
///     pub enum Phase { Lex, Parse, Emit }
/// }
///
/// assert_eq!(Phase::COUNT, 3);
/// assert_eq!(Phase::Emit.code(), 2);
/// assert_eq!(Phase::ALL, [Phase::Lex, Phase::Parse, Phase::Emit]);
/// ```
#[macro_export]
macro_rules! define_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($(#[$variant_meta:meta])* $variant:ident),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[repr(i32)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        $vis enum $name {
            $($(#[$variant_meta])* $variant,)+
        }

        #[allow(dead_code)]
        impl $name {
            pub const COUNT: usize = $crate::count_enumerators!($($variant),+);

            pub const ALL: [$name; $crate::count_enumerators!($($variant),+)] =
                [$($name::$variant),+];

            pub const fn code(self) -> i32 {
                self as i32
            }

            pub const fn index(self) -> usize {
                self as usize
            }
        }
    };
}

/// Attaches a string table to an enumeration declared with
/// [`define_enum!`](crate::define_enum).
///
/// The enumeration is named by a path, so it need not be in scope. The list
/// must repeat the declaration's enumerators in the same order. The build
/// fails if an enumerator is out of place or missing.
///
/// ```
/// mod lights {
///     enumstr::define_enum! {
///         pub enum Light { Red, Amber, Green }
///     }
/// }
/// enumstr::stringify_enum!(lights::Light { Red, Amber, Green });
///
/// assert_eq!(lights::Light::Amber.to_string(), "Amber");
/// ```
///
/// Out of order:
///
/// ```compile_fail
/// enumstr::define_enum! {
///     enum Light { Red, Amber, Green }
/// }
/// enumstr::stringify_enum!(Light { Red, Green, Amber });
/// ```
///
/// Missing an enumerator:
///
/// ```compile_fail
/// enumstr::define_enum! {
///     enum Light { Red, Amber, Green }
/// }
/// enumstr::stringify_enum!(Light { Red, Amber });
/// ```
#[macro_export]
macro_rules! stringify_enum {
    ($($segment:ident)::+ { $($variant:ident),+ $(,)? }) => {
        const _: () = {
            type Target = $($segment)::+;

            let mut position = 0usize;
            $(
                assert!(
                    Target::$variant as usize == position,
                    concat!("`", stringify!($variant), "` is out of order in its string table"),
                );
                position += 1;
            )+
            assert!(
                position == Target::COUNT,
                concat!(
                    "string table of `", stringify!($($segment)::+), "` misses enumerators"
                ),
            );
        };

        impl $crate::EnumStr for $($segment)::+ {
            const NAMES: &'static [&'static str] = &[$(stringify!($variant)),+];

            fn code(self) -> i32 {
                self as i32
            }
        }

        impl ::core::fmt::Display for $($segment)::+ {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str($crate::EnumStr::name(*self))
            }
        }
    };
}

/// Declares an enumeration together with its string table.
///
/// ```
/// use enumstr::EnumStr;
///
/// enumstr::enum_str! {
///     pub enum Light { Red, Amber, Green }
/// }
///
/// assert_eq!(Light::NAMES, &["Red", "Amber", "Green"]);
/// assert_eq!(enumstr::stren!(Light, 1), "Amber");
/// ```
#[macro_export]
macro_rules! enum_str {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($(#[$variant_meta:meta])* $variant:ident),+ $(,)?
        }
    ) => {
        $crate::define_enum! {
            $(#[$meta])*
            $vis enum $name {
                $($(#[$variant_meta])* $variant),+
            }
        }

        $crate::stringify_enum!($name { $($variant),+ });
    };
}

/// Label of enumerator `index` of an enumeration with a string table.
#[macro_export]
macro_rules! stren {
    ($name:ty, $index:expr) => {
        $crate::lookup::<$name>($index)
    };
}
