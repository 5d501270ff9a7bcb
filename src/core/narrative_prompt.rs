/// Narrative Prompt Builder — the system and user instructions sent to
/// the story-generation model.
use crate::core::character_format::format_character;
use crate::core::non_empty;
use crate::schema::character::{Character, ExtendedCharacter};
use crate::schema::story::StoryDetails;
use crate::schema::theme::BookTheme;

/// Base system instruction: narrative rules, illustration technical
/// rules, and the JSON response shape the downstream parser expects. The
/// field names in the shape are a contract with the generation model.
const BASE_SYSTEM_PROMPT: &str = "\
Eres un escritor profesional de cuentos infantiles personalizados. Escribes \
historias cálidas, positivas y apropiadas para niños, en un español sencillo \
y musical.

REGLAS NARRATIVAS:
- Cada página debe hacer avanzar la historia; evita el relleno.
- Usa frases cortas y vocabulario adecuado a la edad indicada.
- El protagonista aparece en todas las páginas; los personajes secundarios \
tienen momentos destacados.
- La historia tiene inicio, desarrollo y un final reconfortante.
- Nunca incluyas contenido violento, aterrador ni tristeza sin resolución.

REGLAS TÉCNICAS PARA LAS DESCRIPCIONES DE ILUSTRACIÓN:
- Cada página incluye un campo imagePrompt con la descripción visual de su \
escena.
- Describe la escena en presente: qué ocurre, dónde, y qué personajes \
aparecen.
- Composición en formato 16:9, regla de los tercios y profundidad por capas.
- No describas texto, letras ni números dentro de la ilustración.

FORMATO DE RESPUESTA:
Responde únicamente con un objeto JSON válido, sin texto adicional, con esta \
forma exacta:
{
  \"title\": \"...\",
  \"pages\": [{ \"pageNumber\": 1, \"text\": \"...\", \"imagePrompt\": \"...\" }],
  \"summary\": \"...\",
  \"targetAge\": \"...\",
  \"theme\": \"...\",
  \"characters\": [\"...\"],
  \"educationalValue\": \"...\"
}";

const ADVENTURE_ADDENDUM: &str = "\
ESTILO AVENTURA: ritmo ágil, escenarios amplios por explorar y pequeños \
desafíos que el protagonista supera con ingenio y valentía.";

const FANTASY_ADDENDUM: &str = "\
ESTILO FANTASÍA: elementos mágicos amables, criaturas fantásticas y un mundo \
imaginario coherente descrito con asombro.";

const EDUCATIONAL_ADDENDUM: &str = "\
ESTILO EDUCATIVO: integra el contenido de aprendizaje en la trama de forma \
natural, repite el concepto clave en al menos dos páginas y ciérralo en la \
última.";

/// Build the system instruction for the story model.
///
/// An exact match on the book-type tag appends one style addendum;
/// unrecognized or absent tags yield the base block unchanged.
pub fn build_system_prompt(book_type: Option<&str>) -> String {
    let mut prompt = String::from(BASE_SYSTEM_PROMPT);
    if let Some(addendum) = book_type.and_then(style_addendum) {
        prompt.push_str("\n\n");
        prompt.push_str(addendum);
    }
    prompt
}

fn style_addendum(book_type: &str) -> Option<&'static str> {
    match book_type {
        "adventure" => Some(ADVENTURE_ADDENDUM),
        "fantasy" => Some(FANTASY_ADDENDUM),
        "educational" => Some(EDUCATIONAL_ADDENDUM),
        _ => None,
    }
}

/// Build the user instruction for one generation request.
///
/// `page_count` is the number of content pages; the story itself gets
/// `page_count + 1` pages (cover plus content), and the prompt states
/// that total explicitly.
pub fn build_user_prompt(
    main_character: &Character,
    supporting: &[Character],
    theme: &BookTheme,
    page_count: u32,
    story_details: Option<&StoryDetails>,
) -> String {
    let mut prompt = String::new();

    // Opening sentence
    let supporting_names: Vec<&str> = supporting.iter().map(|c| c.name.as_str()).collect();
    if supporting_names.is_empty() {
        prompt.push_str(&format!(
            "Escribe un cuento personalizado cuyo protagonista es {}.\n",
            main_character.name
        ));
    } else {
        prompt.push_str(&format!(
            "Escribe un cuento personalizado cuyo protagonista es {} y en el que también aparecen {}.\n",
            main_character.name,
            supporting_names.join(", ")
        ));
    }

    prompt.push_str("\nPROTAGONISTA:\n");
    prompt.push_str(&format_character(&extended(main_character, story_details), true));
    prompt.push('\n');

    if !supporting.is_empty() {
        prompt.push_str("\nPERSONAJES SECUNDARIOS:\n");
        let blocks: Vec<String> = supporting
            .iter()
            .map(|character| format_character(&extended(character, story_details), false))
            .collect();
        prompt.push_str(&blocks.join("\n\n"));
        prompt.push('\n');
    }

    prompt.push_str("\nHISTORIA:\n");
    prompt.push_str(&format!("Tema: {}\n", theme.name));
    if !theme.description.trim().is_empty() {
        prompt.push_str(&format!("Descripción del tema: {}\n", theme.description.trim()));
    }
    prompt.push_str(&format!("Edad recomendada: {}\n", theme.age_range_or_default()));
    prompt.push_str(&format!(
        "Extensión: {} páginas en total (1 portada + {} páginas de contenido)\n",
        page_count + 1,
        page_count
    ));
    if let Some(details) = story_details {
        if let Some(style) = non_empty(&details.style) {
            prompt.push_str(&format!("Estilo: {}\n", style));
        }
        if let Some(tone) = non_empty(&details.tone) {
            prompt.push_str(&format!("Tono: {}\n", tone));
        }
        if let Some(setting) = non_empty(&details.setting) {
            prompt.push_str(&format!("Escenario: {}\n", setting));
        }
        if let Some(message) = non_empty(&details.message) {
            prompt.push_str(&format!("Mensaje: {}\n", message));
        }
        if !details.specific_elements.is_empty() {
            prompt.push_str(&format!(
                "Elementos que deben aparecer: {}\n",
                details.specific_elements.join(", ")
            ));
        }
    }

    prompt.push_str("\nREQUISITOS:\n");
    prompt.push_str(&format!(
        "- La historia debe tener exactamente {} páginas: 1 portada + {} páginas de contenido.\n",
        page_count + 1,
        page_count
    ));
    prompt.push_str(
        "- Cada página necesita su texto y su descripción de ilustración (imagePrompt).\n",
    );
    if !supporting.is_empty() {
        prompt.push_str(
            "- Cada personaje secundario debe tener al menos un momento destacado.\n",
        );
    }
    prompt.push_str(
        "- Respeta las reglas técnicas de ilustración indicadas en las instrucciones del sistema.\n",
    );

    prompt
}

/// Attach the request-scoped overlay for this character, when the request
/// carries one under the character's lookup key.
fn extended<'a>(
    character: &'a Character,
    story_details: Option<&'a StoryDetails>,
) -> ExtendedCharacter<'a> {
    let story = story_details
        .and_then(|details| details.character_details.get(character.lookup_key()));
    ExtendedCharacter {
        base: character,
        story,
    }
}
