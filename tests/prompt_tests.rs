/// End-to-end prompt composition tests over the RON fixtures.
use utale_prompts::core::character_format::format_character;
use utale_prompts::core::emotion::{classify_scene_lighting, DEFAULT_LIGHTING};
use utale_prompts::core::image_prompt::build_image_prompt;
use utale_prompts::core::narrative_prompt::{build_system_prompt, build_user_prompt};
use utale_prompts::schema::book::{BookMeta, Page};
use utale_prompts::schema::character::{load_cast_from_ron, Character, ExtendedCharacter};
use utale_prompts::schema::story::StoryDetails;
use utale_prompts::schema::theme::BookTheme;

fn load_cast() -> Vec<Character> {
    load_cast_from_ron(std::path::Path::new("tests/fixtures/cast.ron")).unwrap()
}

fn load_theme() -> BookTheme {
    BookTheme::load_from_ron(std::path::Path::new("tests/fixtures/theme.ron")).unwrap()
}

#[test]
fn cast_fixture_loads() {
    let cast = load_cast();
    assert_eq!(cast.len(), 3);
    assert_eq!(cast[0].name, "Lucía");
    assert_eq!(cast[1].name, "Coco");
    assert_eq!(cast[0].lookup_key(), "char-lucia");
    assert_eq!(cast[2].lookup_key(), "Ana");
}

#[test]
fn theme_fixture_loads() {
    let theme = load_theme();
    assert_eq!(theme.name, "Aventura espacial");
    assert_eq!(theme.age_range_or_default(), "4-8 años");
}

#[test]
fn fixture_favorites_json_string_is_parsed() {
    let cast = load_cast();
    let block = format_character(&ExtendedCharacter::plain(&cast[0]), true);
    assert!(block.contains("Cosas favoritas: animal: gato, color: azul"));
}

#[test]
fn full_user_prompt_from_fixtures() {
    let cast = load_cast();
    let theme = load_theme();
    let (main, supporting) = cast.split_first().unwrap();

    let prompt = build_user_prompt(main, supporting, &theme, 5, None);
    assert!(prompt.contains("protagonista es Lucía"));
    assert!(prompt.contains("también aparecen Coco, Ana"));
    assert!(prompt.contains("Tema: Aventura espacial"));
    assert!(prompt.contains("Edad recomendada: 4-8 años"));
    assert!(prompt.contains("6 páginas en total (1 portada + 5 páginas de contenido)"));
}

#[test]
fn page_count_statement_is_independent_of_cast_size() {
    let cast = load_cast();
    let theme = load_theme();

    let alone = build_user_prompt(&cast[0], &[], &theme, 5, None);
    let full = build_user_prompt(&cast[0], &cast[1..], &theme, 5, None);
    for prompt in [&alone, &full] {
        assert!(prompt.contains("exactamente 6 páginas"));
    }
}

#[test]
fn system_prompt_tag_fallback() {
    let base = build_system_prompt(None);
    assert_eq!(build_system_prompt(Some("mystery")), base);
    assert_ne!(build_system_prompt(Some("adventure")), base);
}

#[test]
fn classifier_default_on_empty_text() {
    assert_eq!(classify_scene_lighting(""), DEFAULT_LIGHTING);
}

#[test]
fn image_prompt_whole_word_character_detection() {
    let cast = load_cast();
    let meta = BookMeta {
        title: "El viaje de Lucía".to_string(),
        target_age: None,
        theme: None,
    };

    // "Ana" appears only inside "banana": she must be excluded. "Coco"
    // appears as a whole word: he must be included.
    let page = Page {
        page_number: 3,
        text: "Coco encontró una banana flotando en la nave.".to_string(),
        image_prompt: "Un gato naranja persigue una banana en gravedad cero".to_string(),
    };
    let prompt = build_image_prompt(&page, &meta, &cast);

    assert!(prompt.contains("Lucía (protagonista):"));
    assert!(prompt.contains("Coco (personaje secundario):"));
    assert!(!prompt.contains("Ana (personaje secundario)"));
}

#[test]
fn image_prompt_uses_default_age_when_unset() {
    let page = Page {
        page_number: 1,
        text: String::new(),
        image_prompt: "Portada del cuento".to_string(),
    };
    let meta = BookMeta {
        title: "Cuento".to_string(),
        target_age: None,
        theme: None,
    };
    let prompt = build_image_prompt(&page, &meta, &[]);
    assert!(prompt.contains("apropiada para niños de 5-10 años"));
}

#[test]
fn composition_is_byte_deterministic() {
    let cast = load_cast();
    let theme = load_theme();
    let details = StoryDetails {
        tone: Some("tierno".to_string()),
        ..Default::default()
    };
    let page = Page {
        page_number: 2,
        text: "Lucía y Coco despegan juntos.".to_string(),
        image_prompt: "Un cohete despegando al amanecer".to_string(),
    };
    let meta = BookMeta {
        title: "El viaje de Lucía".to_string(),
        target_age: Some("4-8 años".to_string()),
        theme: Some("espacio".to_string()),
    };

    let user_a = build_user_prompt(&cast[0], &cast[1..], &theme, 5, Some(&details));
    let user_b = build_user_prompt(&cast[0], &cast[1..], &theme, 5, Some(&details));
    assert_eq!(user_a, user_b);

    let image_a = build_image_prompt(&page, &meta, &cast);
    let image_b = build_image_prompt(&page, &meta, &cast);
    assert_eq!(image_a, image_b);

    let system_a = build_system_prompt(Some("fantasy"));
    let system_b = build_system_prompt(Some("fantasy"));
    assert_eq!(system_a, system_b);
}
