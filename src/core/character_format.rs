/// Character Formatter — renders one character into the descriptive text
/// block shared by the narrative and image prompt builders.
use crate::core::non_empty;
use crate::schema::character::{parse_favorites, ExtendedCharacter};

/// Format one character as a multi-line Spanish description block.
///
/// Identity lines first (name, type, age), then the feature list in fixed
/// order. Absent or empty fields are omitted entirely — no placeholder
/// lines. The relation-to-main line only appears for supporting
/// characters. Identical inputs always yield byte-identical output.
pub fn format_character(character: &ExtendedCharacter<'_>, is_main: bool) -> String {
    let base = character.base;
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!("Nombre: {}", base.name));
    lines.push(format!("Tipo: {}", base.character_type.label()));
    if let Some(age) = base.age {
        lines.push(format!("Edad: {} años", age));
    }
    if let Some(description) = non_empty(&base.physical_description) {
        lines.push(format!("Descripción física: {}", description));
    }
    if let Some(personality) = non_empty(&base.personality) {
        lines.push(format!("Personalidad: {}", personality));
    }
    if !base.interests.is_empty() {
        lines.push(format!("Intereses: {}", base.interests.join(", ")));
    }
    if let Some(likes) = non_empty(&base.likes) {
        lines.push(format!("Le gusta: {}", likes));
    }
    if let Some(dislikes) = non_empty(&base.dislikes) {
        lines.push(format!("No le gusta: {}", dislikes));
    }
    if let Some(favorites) = parse_favorites(base.favorites.as_ref()) {
        let rendered: Vec<String> = favorites
            .iter()
            .map(|(category, value)| format!("{}: {}", category, value))
            .collect();
        lines.push(format!("Cosas favoritas: {}", rendered.join(", ")));
    }

    if let Some(story) = character.story {
        if let Some(role) = non_empty(&story.role) {
            lines.push(format!("Rol en la historia: {}", role));
        }
        if let Some(abilities) = non_empty(&story.abilities) {
            lines.push(format!("Habilidades especiales: {}", abilities));
        }
        if let Some(details) = non_empty(&story.details) {
            lines.push(format!("Detalles para la historia: {}", details));
        }
        if !is_main {
            if let Some(relation) = non_empty(&story.relation_to_main) {
                lines.push(format!("Relación con el protagonista: {}", relation));
            }
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::character::{Character, CharacterStoryDetails, CharacterType};
    use serde_json::json;

    fn make_character() -> Character {
        Character {
            id: None,
            name: "Lucía".to_string(),
            character_type: CharacterType::Child,
            age: Some(6),
            physical_description: Some("pelo rizado castaño y ojos grandes".to_string()),
            personality: Some("curiosa y alegre".to_string()),
            likes: Some("pintar".to_string()),
            dislikes: Some("la oscuridad".to_string()),
            interests: vec!["dinosaurios".to_string(), "espacio".to_string()],
            favorites: Some(json!({"color": "azul"})),
            traits: Vec::new(),
        }
    }

    #[test]
    fn full_block_ordering() {
        let character = make_character();
        let block = format_character(&ExtendedCharacter::plain(&character), true);
        let lines: Vec<&str> = block.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Nombre: Lucía",
                "Tipo: niño",
                "Edad: 6 años",
                "Descripción física: pelo rizado castaño y ojos grandes",
                "Personalidad: curiosa y alegre",
                "Intereses: dinosaurios, espacio",
                "Le gusta: pintar",
                "No le gusta: la oscuridad",
                "Cosas favoritas: color: azul",
            ]
        );
    }

    #[test]
    fn missing_fields_are_omitted() {
        let character = Character {
            id: None,
            name: "Coco".to_string(),
            character_type: CharacterType::Pet,
            age: None,
            physical_description: None,
            personality: None,
            likes: None,
            dislikes: None,
            interests: Vec::new(),
            favorites: None,
            traits: Vec::new(),
        };
        let block = format_character(&ExtendedCharacter::plain(&character), false);
        assert_eq!(block, "Nombre: Coco\nTipo: mascota");
    }

    #[test]
    fn whitespace_only_fields_are_omitted() {
        let mut character = make_character();
        character.personality = Some("   ".to_string());
        let block = format_character(&ExtendedCharacter::plain(&character), true);
        assert!(!block.contains("Personalidad"));
    }

    #[test]
    fn malformed_favorites_omits_line() {
        let mut character = make_character();
        character.favorites = Some(json!("{color: azul"));
        let block = format_character(&ExtendedCharacter::plain(&character), true);
        assert!(!block.contains("favoritas"));
    }

    #[test]
    fn empty_favorites_omits_line() {
        let mut character = make_character();
        character.favorites = Some(json!({}));
        let block = format_character(&ExtendedCharacter::plain(&character), true);
        assert!(!block.contains("favoritas"));
    }

    #[test]
    fn story_fields_appended() {
        let character = make_character();
        let story = CharacterStoryDetails {
            role: Some("exploradora".to_string()),
            abilities: Some("hablar con los animales".to_string()),
            details: Some("lleva una mochila roja".to_string()),
            relation_to_main: None,
        };
        let block = format_character(&ExtendedCharacter::with_story(&character, &story), true);
        assert!(block.contains("Rol en la historia: exploradora"));
        assert!(block.contains("Habilidades especiales: hablar con los animales"));
        assert!(block.contains("Detalles para la historia: lleva una mochila roja"));
    }

    #[test]
    fn relation_only_for_supporting_characters() {
        let character = make_character();
        let story = CharacterStoryDetails {
            relation_to_main: Some("su mejor amigo".to_string()),
            ..Default::default()
        };

        let main = format_character(&ExtendedCharacter::with_story(&character, &story), true);
        assert!(!main.contains("Relación con el protagonista"));

        let supporting =
            format_character(&ExtendedCharacter::with_story(&character, &story), false);
        assert!(supporting.contains("Relación con el protagonista: su mejor amigo"));
    }

    #[test]
    fn formatting_is_deterministic() {
        let character = make_character();
        let first = format_character(&ExtendedCharacter::plain(&character), true);
        let second = format_character(&ExtendedCharacter::plain(&character), true);
        assert_eq!(first, second);
    }

    #[test]
    fn formatting_does_not_mutate_input() {
        let character = make_character();
        let before = format!("{:?}", character);
        let _ = format_character(&ExtendedCharacter::plain(&character), true);
        assert_eq!(before, format!("{:?}", character));
    }
}
