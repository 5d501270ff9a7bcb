/// Image Prompt Builder — the per-page illustration instruction sent to
/// the image-generation model.
use regex::Regex;

use crate::core::emotion::classify_scene_lighting;
use crate::core::non_empty;
use crate::schema::book::{BookMeta, Page};
use crate::schema::character::{parse_favorites, Character};
use crate::schema::theme::DEFAULT_AGE_RANGE;

/// Personality adjectives mapped to short visual clauses. Matching is
/// substring containment of the key in the lower-cased personality text;
/// the first declared key that matches wins, and no match adds nothing.
const PERSONALITY_VISUALS: &[(&str, &str)] = &[
    ("alegre", "expresión sonriente y postura animada"),
    ("tímido", "postura recogida y mirada tímida"),
    ("tímida", "postura recogida y mirada tímida"),
    ("valiente", "postura erguida y gesto decidido"),
    ("curioso", "ojos muy abiertos y gesto de interés"),
    ("curiosa", "ojos muy abiertos y gesto de interés"),
    ("travieso", "sonrisa pícara y actitud juguetona"),
    ("traviesa", "sonrisa pícara y actitud juguetona"),
    ("dulce", "expresión tierna y gesto amable"),
    ("enérgico", "cuerpo en movimiento y gesto entusiasta"),
    ("enérgica", "cuerpo en movimiento y gesto entusiasta"),
    ("soñador", "mirada soñadora y expresión serena"),
    ("soñadora", "mirada soñadora y expresión serena"),
    ("cariñoso", "gesto afectuoso y sonrisa cálida"),
    ("cariñosa", "gesto afectuoso y sonrisa cálida"),
];

const EXCLUSIONS: &str = "\
EVITAR:
- Texto, letras o números dentro de la imagen.
- Contenido aterrador o violento.
- Distorsiones anatómicas.
- Oscuridad excesiva.";

/// Build the illustration instruction for one page.
///
/// The first character in `characters` is the main character by
/// convention and is always included. A supporting character appears in
/// the page's character section only when its name occurs in the page
/// text as a case-insensitive whole word. An empty character list falls
/// back to a variant with no character section at all.
pub fn build_image_prompt(page: &Page, book: &BookMeta, characters: &[Character]) -> String {
    let target_age = book.target_age.as_deref().unwrap_or(DEFAULT_AGE_RANGE);
    let lighting = classify_scene_lighting(&page.text);

    let mut prompt = String::new();

    prompt.push_str(&format!(
        "Ilustración para la página {} del cuento infantil \"{}\"",
        page.page_number, book.title
    ));
    if let Some(theme) = book.theme.as_deref().filter(|theme| !theme.trim().is_empty()) {
        prompt.push_str(&format!(" (tema: {})", theme));
    }
    prompt.push_str(".\n\n");

    prompt.push_str(&format!("ESCENA: {}\n", page.image_prompt));

    if let Some((main, rest)) = characters.split_first() {
        prompt.push_str("\nPERSONAJES EN ESCENA:\n");
        prompt.push_str(&format!("- {}\n", character_image_block(main, true)));
        for character in rest {
            if name_in_text(&character.name, &page.text) {
                prompt.push_str(&format!("- {}\n", character_image_block(character, false)));
            }
        }
    }

    prompt.push_str(&format!(
        "\nREQUISITOS TÉCNICOS:\n\
         - Formato 16:9, composición con regla de los tercios y profundidad por capas.\n\
         - Iluminación {}.\n\
         - Paleta de colores cohesionada en toda la escena.\n\
         - Expresiones faciales claras y legibles.\n\
         - Estilo profesional de ilustración infantil.\n",
        lighting
    ));

    prompt.push_str(&format!("\nCONTEXTO (texto de la página): \"{}\"\n", page.text));
    prompt.push('\n');
    prompt.push_str(EXCLUSIONS);
    prompt.push_str(&format!(
        "\n\nLa ilustración debe ser apropiada para niños de {}.\n",
        target_age
    ));

    prompt
}

/// Render one character for the image model. Shorter than the narrative
/// block: a role-tagged identity line plus visual cues only.
fn character_image_block(character: &Character, is_main: bool) -> String {
    let role = if is_main {
        "protagonista"
    } else {
        "personaje secundario"
    };
    let mut block = format!("{} ({}): ", character.name, role);

    match non_empty(&character.physical_description) {
        Some(description) => block.push_str(description),
        None => {
            block.push_str(character.character_type.label());
            if character.character_type.is_person() {
                if let Some(age) = character.age {
                    block.push_str(&format!(" de {} años", age));
                }
            }
        }
    }

    if let Some(color) = favorite_color(character) {
        block.push_str(&format!(", con elementos en color {}", color));
    }
    if let Some(personality) = non_empty(&character.personality) {
        if let Some(clause) = personality_visual(personality) {
            block.push_str(&format!(", {}", clause));
        }
    }

    block
}

fn favorite_color(character: &Character) -> Option<String> {
    parse_favorites(character.favorites.as_ref())?
        .into_iter()
        .find(|(category, _)| category == "color")
        .map(|(_, value)| value)
}

fn personality_visual(personality: &str) -> Option<&'static str> {
    let normalized = personality.to_lowercase();
    for &(key, clause) in PERSONALITY_VISUALS {
        if normalized.contains(key) {
            return Some(clause);
        }
    }
    None
}

/// Whole-word, case-insensitive name detection. A word-boundary match
/// avoids partial-name collisions ("Ana" inside "banana").
fn name_in_text(name: &str, text: &str) -> bool {
    let pattern = format!(r"\b{}\b", regex::escape(&name.to_lowercase()));
    match Regex::new(&pattern) {
        Ok(re) => re.is_match(&text.to_lowercase()),
        Err(_) => false,
    }
}
