use sitehead_core::{
    MetadataError, PageMetadataInput, SiteDefaults, StructuredDataType, TextDirection, resolve,
};

fn bakery_defaults() -> SiteDefaults {
    SiteDefaults::new(
        "AL-NOOR BAKERY",
        "https://alnoor-bakery.vercel.app",
        "Authentic halal baked goods and meals",
        "/og-default.jpg",
        "#f59e0b",
    )
    .expect("valid defaults")
}

fn assert_absolute(value: &str) {
    let parsed = url::Url::parse(value).unwrap_or_else(|err| panic!("{value}: {err}"));
    assert!(!parsed.cannot_be_a_base(), "{value}");
}

#[test]
fn home_page_uses_site_defaults() {
    let resolved = resolve(&PageMetadataInput::new("Home"), &bakery_defaults()).expect("resolve");
    assert_eq!(resolved.title, "Home");
    assert_eq!(resolved.description, "Authentic halal baked goods and meals");
    assert_eq!(resolved.canonical_url, "https://alnoor-bakery.vercel.app/");
    assert_eq!(
        resolved.image_url,
        "https://alnoor-bakery.vercel.app/og-default.jpg"
    );
    assert_eq!(resolved.language, "en");
    assert_eq!(resolved.direction, TextDirection::Ltr);
    assert!(!resolved.noindex);
    assert_eq!(resolved.structured_data_type, StructuredDataType::WebSite);
    assert_eq!(resolved.site_name, "AL-NOOR BAKERY");
    assert_eq!(resolved.theme_color, "#f59e0b");
}

#[test]
fn empty_title_is_invalid_input() {
    let err = resolve(&PageMetadataInput::new(""), &bakery_defaults()).expect_err("empty title");
    assert!(matches!(err, MetadataError::InvalidInput { field: "title", .. }));
}

#[test]
fn default_input_has_no_title() {
    let err = resolve(&PageMetadataInput::default(), &bakery_defaults()).expect_err("no title");
    assert!(err.to_string().contains("title"));
}

#[test]
fn arabic_page_is_right_to_left() {
    let input = PageMetadataInput::new("Test").with_language("ar");
    let resolved = resolve(&input, &bakery_defaults()).expect("resolve");
    assert_eq!(resolved.direction, TextDirection::Rtl);
    assert_eq!(resolved.language, "ar");
}

#[test]
fn direction_law_over_languages() {
    let defaults = bakery_defaults();
    for language in ["ar", "he", "fa", "ur"] {
        let input = PageMetadataInput::new("Page").with_language(language);
        let resolved = resolve(&input, &defaults).expect("resolve");
        assert_eq!(resolved.direction, TextDirection::Rtl, "{language}");
    }
    for language in ["en", "fr", "tr", "ms", "id", "bn", "de"] {
        let input = PageMetadataInput::new("Page").with_language(language);
        let resolved = resolve(&input, &defaults).expect("resolve");
        assert_eq!(resolved.direction, TextDirection::Ltr, "{language}");
    }
}

#[test]
fn explicit_direction_wins_over_language() {
    let input = PageMetadataInput::new("Test")
        .with_language("ar")
        .with_direction(TextDirection::Ltr);
    let resolved = resolve(&input, &bakery_defaults()).expect("resolve");
    assert_eq!(resolved.direction, TextDirection::Ltr);

    let input = PageMetadataInput::new("Test")
        .with_language("en")
        .with_direction(TextDirection::Rtl);
    let resolved = resolve(&input, &bakery_defaults()).expect("resolve");
    assert_eq!(resolved.direction, TextDirection::Rtl);
}

#[test]
fn absolute_image_passes_through() {
    let input = PageMetadataInput::new("Gallery").with_image("https://cdn.example.com/pic.jpg");
    let resolved = resolve(&input, &bakery_defaults()).expect("resolve");
    assert_eq!(resolved.image_url, "https://cdn.example.com/pic.jpg");
}

#[test]
fn relative_image_without_slash_is_joined_once() {
    let input = PageMetadataInput::new("Gallery").with_image("images/cake.jpg");
    let resolved = resolve(&input, &bakery_defaults()).expect("resolve");
    assert_eq!(
        resolved.image_url,
        "https://alnoor-bakery.vercel.app/images/cake.jpg"
    );
}

#[test]
fn origin_with_trailing_slash_joins_once() {
    let defaults = SiteDefaults::new(
        "AL-NOOR BAKERY",
        "https://alnoor-bakery.vercel.app/",
        "Authentic halal baked goods and meals",
        "/og-default.jpg",
        "#f59e0b",
    )
    .expect("valid defaults");
    let input = PageMetadataInput::new("Menu").with_canonical_path("/menu");
    let resolved = resolve(&input, &defaults).expect("resolve");
    assert_eq!(resolved.canonical_url, "https://alnoor-bakery.vercel.app/menu");
}

#[test]
fn absolute_canonical_is_used_verbatim() {
    let input = PageMetadataInput::new("Menu").with_canonical_path("https://alnoor.example/menu");
    let resolved = resolve(&input, &bakery_defaults()).expect("resolve");
    assert_eq!(resolved.canonical_url, "https://alnoor.example/menu");
}

#[test]
fn urls_are_always_absolute() {
    let defaults = bakery_defaults();
    let inputs = [
        PageMetadataInput::new("A"),
        PageMetadataInput::new("B").with_canonical_path("menu"),
        PageMetadataInput::new("C").with_canonical_path("/blog/eid-sweets"),
        PageMetadataInput::new("D").with_image("//cdn.example.com/x.png"),
        PageMetadataInput::new("E").with_image("/images/bread.webp"),
        PageMetadataInput::new("F")
            .with_image("https://cdn.example.com/pic.jpg")
            .with_canonical_path("https://alnoor.example/"),
    ];
    for input in &inputs {
        let resolved = resolve(input, &defaults).expect("resolve");
        assert_absolute(&resolved.canonical_url);
        assert_absolute(&resolved.image_url);
    }
}

#[test]
fn resolution_is_idempotent() {
    let defaults = bakery_defaults();
    let input = PageMetadataInput::new("Catering")
        .with_description("Trays for every occasion")
        .with_language("ur")
        .with_noindex(true)
        .with_structured_data_type(StructuredDataType::Product);
    let first = resolve(&input, &defaults).expect("resolve");
    let second = resolve(&input, &defaults).expect("resolve");
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).expect("serialize"),
        serde_json::to_string(&second).expect("serialize")
    );
}

#[test]
fn overrides_are_kept() {
    let input = PageMetadataInput::new("Catering")
        .with_description("Trays for every occasion")
        .with_noindex(true)
        .with_structured_data_type(StructuredDataType::LocalBusiness);
    let resolved = resolve(&input, &bakery_defaults()).expect("resolve");
    assert_eq!(resolved.description, "Trays for every occasion");
    assert!(resolved.noindex);
    assert_eq!(resolved.structured_data_type, StructuredDataType::LocalBusiness);
}
