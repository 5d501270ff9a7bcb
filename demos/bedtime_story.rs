/// Bedtime Story example — the minimal case: one character, no story
/// details, default theme age range.
///
/// Run with: cargo run --example bedtime_story
use utale_prompts::core::narrative_prompt::{build_system_prompt, build_user_prompt};
use utale_prompts::schema::character::{Character, CharacterType};
use utale_prompts::schema::theme::BookTheme;

fn main() {
    let mateo = Character {
        id: None,
        name: "Mateo".to_string(),
        character_type: CharacterType::Child,
        age: Some(4),
        physical_description: None,
        personality: Some("soñador".to_string()),
        likes: Some("su manta de estrellas".to_string()),
        dislikes: None,
        interests: Vec::new(),
        favorites: None,
        traits: Vec::new(),
    };

    let theme = BookTheme {
        name: "Buenas noches".to_string(),
        age_range: None,
        description: "Una historia tranquila para ir a dormir.".to_string(),
    };

    println!("=== SYSTEM PROMPT ===\n");
    println!("{}\n", build_system_prompt(None));

    println!("=== USER PROMPT ===\n");
    println!("{}", build_user_prompt(&mateo, &[], &theme, 3, None));
}
