use enumstr::{EnumStr, define_enum, enum_str, lookup, names, stren, stringify_enum};

enum_str! {
    /// Traffic light colors.
    pub enum Light { Red, Amber, Green }
}

define_enum! {
    enum Phase {
        Lex,
        Parse,
        /// Final phase.
        Emit,
    }
}

mod signals {
    enumstr::define_enum! {
        pub enum Signal { Hup, Int, Quit, Kill, Term }
    }
}

stringify_enum!(signals::Signal { Hup, Int, Quit, Kill, Term });

use signals::Signal;

mod modes {
    pub mod file {
        enumstr::define_enum! {
            pub enum Mode { Read, Write, Append }
        }
    }
}

stringify_enum!(crate::modes::file::Mode { Read, Write, Append });

enum_str! {
    enum Single { Only }
}

#[test]
fn test_values_follow_declaration_order() {
    assert_eq!(Light::Red.code(), 0);
    assert_eq!(Light::Amber.code(), 1);
    assert_eq!(Light::Green.code(), 2);
    assert_eq!(Light::COUNT, 3);
    assert_eq!(Light::ALL, [Light::Red, Light::Amber, Light::Green]);
}

#[test]
fn test_string_table_matches_spelling() {
    assert_eq!(Light::NAMES, &["Red", "Amber", "Green"]);
    assert_eq!(Light::NAMES.len(), Light::COUNT);
}

#[test]
fn test_lookup_matches_table() {
    assert_eq!(lookup::<Light>(1), "Amber");
    assert_eq!(stren!(Light, 1), "Amber");

    for light in Light::ALL {
        assert_eq!(lookup::<Light>(light.index()), Light::NAMES[light.index()]);
        assert_eq!(lookup::<Light>(light.index()), light.name());
    }
}

#[test]
fn test_display_uses_label() {
    assert_eq!(format!("{}", Light::Green), "Green");
    assert_eq!(Signal::Quit.to_string(), "Quit");
}

#[test]
fn test_enum_without_strings() {
    assert_eq!(Phase::COUNT, 3);
    assert_eq!(Phase::Lex.index(), 0);
    assert_eq!(Phase::Emit.code(), 2);
    assert!(Phase::Lex < Phase::Parse);
    assert_eq!(format!("{:?}", Phase::Parse), "Parse");
}

#[test]
fn test_two_step_declaration() {
    assert_eq!(Signal::COUNT, 5);
    assert_eq!(Signal::NAMES, &["Hup", "Int", "Quit", "Kill", "Term"]);
    assert_eq!(Signal::Kill.code(), 3);
    assert_eq!(stren!(Signal, 4), "Term");
}

#[test]
fn test_two_step_declaration_through_nested_path() {
    use modes::file::Mode;

    assert_eq!(Mode::NAMES, &["Read", "Write", "Append"]);
    assert_eq!(lookup::<Mode>(Mode::Append.index()), "Append");
    assert_eq!(Mode::Write.to_string(), "Write");
}

#[test]
fn test_single_enumerator() {
    assert_eq!(Single::COUNT, 1);
    assert_eq!(Single::Only.code(), 0);
    assert_eq!(Single::NAMES, &["Only"]);
}

#[test]
fn test_names_iterates_in_order() {
    let collected: Vec<_> = names::<Light>().collect();
    assert_eq!(collected, ["Red", "Amber", "Green"]);
    assert_eq!(names::<Signal>().len(), Signal::COUNT);
    assert_eq!(names::<Signal>().next_back(), Some("Term"));
}

#[test]
fn test_every_valid_index_resolves() {
    for index in 0..Signal::COUNT {
        assert_eq!(lookup::<Signal>(index), Signal::ALL[index].name());
    }
}

#[test]
#[should_panic]
fn test_out_of_range_lookup_panics() {
    let _ = lookup::<Light>(Light::COUNT);
}

#[test]
fn test_count_enumerators() {
    const COUNT: usize = enumstr::count_enumerators!(A, B, C, D);
    assert_eq!(COUNT, 4);
    assert_eq!(enumstr::count_enumerators!(), 0);
}
