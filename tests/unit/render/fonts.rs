use super::*;

#[test]
fn empty_book_has_no_faces() {
    let book = FontBook::empty();
    assert!(book.is_empty());
    assert_eq!(book.face_count(), 0);
    assert!(book.face_data(&["Inter", "sans-serif"], 400, false).is_none());
}

#[test]
fn missing_font_dir_is_skipped() {
    let opts = FontOpts {
        system_fonts: false,
        font_dirs: vec![PathBuf::from("/definitely/not/a/font/dir")],
    };
    assert!(FontBook::load(&opts).is_empty());
}

#[test]
fn generic_family_names_map_to_generics() {
    assert_eq!(css_family("serif"), fontdb::Family::Serif);
    assert_eq!(css_family("cursive"), fontdb::Family::Cursive);
    assert_eq!(css_family("Georgia"), fontdb::Family::Name("Georgia"));
}

#[test]
fn font_opts_default_to_system_fonts() {
    let opts: FontOpts = serde_json::from_str("{}").unwrap();
    assert!(opts.system_fonts);
    assert!(opts.font_dirs.is_empty());
}
