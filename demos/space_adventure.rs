/// Space Adventure example — a full generation request: main character,
/// two supporting characters, story details, and a per-page image prompt.
///
/// Run with: cargo run --example space_adventure
use std::collections::HashMap;

use serde_json::json;
use utale_prompts::core::image_prompt::build_image_prompt;
use utale_prompts::core::narrative_prompt::{build_system_prompt, build_user_prompt};
use utale_prompts::schema::book::{BookMeta, Page};
use utale_prompts::schema::character::{Character, CharacterStoryDetails, CharacterType};
use utale_prompts::schema::story::StoryDetails;
use utale_prompts::schema::theme::BookTheme;

fn main() {
    // --- The cast ---
    let lucia = Character {
        id: Some("char-lucia".to_string()),
        name: "Lucía".to_string(),
        character_type: CharacterType::Child,
        age: Some(6),
        physical_description: Some("pelo rizado castaño, ojos grandes y botas amarillas".to_string()),
        personality: Some("curiosa y valiente".to_string()),
        likes: Some("los dinosaurios y mirar las estrellas".to_string()),
        dislikes: Some("la oscuridad".to_string()),
        interests: vec!["espacio".to_string(), "dinosaurios".to_string()],
        favorites: Some(json!({"color": "azul", "comida": "macarrones"})),
        traits: vec!["observadora".to_string()],
    };

    let coco = Character {
        id: Some("char-coco".to_string()),
        name: "Coco".to_string(),
        character_type: CharacterType::Pet,
        age: None,
        physical_description: Some("un gato naranja con un cascabel plateado".to_string()),
        personality: Some("travieso".to_string()),
        likes: None,
        dislikes: None,
        interests: Vec::new(),
        favorites: None,
        traits: Vec::new(),
    };

    let robot = Character {
        id: Some("char-bip".to_string()),
        name: "Bip".to_string(),
        character_type: CharacterType::Toy,
        age: None,
        physical_description: Some("un pequeño robot plateado con una antena que parpadea".to_string()),
        personality: Some("dulce".to_string()),
        likes: None,
        dislikes: None,
        interests: Vec::new(),
        favorites: None,
        traits: Vec::new(),
    };

    // --- Request-scoped story details ---
    let mut character_details = HashMap::new();
    character_details.insert(
        "char-coco".to_string(),
        CharacterStoryDetails {
            role: Some("copiloto".to_string()),
            relation_to_main: Some("su gato".to_string()),
            ..Default::default()
        },
    );
    character_details.insert(
        "char-bip".to_string(),
        CharacterStoryDetails {
            role: Some("navegante".to_string()),
            abilities: Some("traducir los sonidos del espacio".to_string()),
            relation_to_main: Some("su juguete favorito".to_string()),
            ..Default::default()
        },
    );
    let details = StoryDetails {
        page_count: Some(5),
        tone: Some("tierno y asombrado".to_string()),
        setting: Some("una pequeña nave con ventanas redondas".to_string()),
        message: Some("la curiosidad abre puertas".to_string()),
        specific_elements: vec!["un cohete rojo".to_string(), "tres lunas".to_string()],
        character_details,
        ..Default::default()
    };

    let theme = BookTheme {
        name: "Aventura espacial".to_string(),
        age_range: Some("4-8 años".to_string()),
        description: "Un viaje entre planetas para descubrir el espacio.".to_string(),
    };

    // --- Story prompts ---
    println!("=== SYSTEM PROMPT ===\n");
    println!("{}\n", build_system_prompt(Some("adventure")));

    let cast = [lucia, coco, robot];
    println!("=== USER PROMPT ===\n");
    println!(
        "{}",
        build_user_prompt(&cast[0], &cast[1..], &theme, 5, Some(&details))
    );

    // --- Image prompt for one generated page ---
    let page = Page {
        page_number: 3,
        text: "Coco maulló al ver las tres lunas, y Lucía sonrió: la aventura acababa de empezar.".to_string(),
        image_prompt: "Una niña y un gato naranja miran tres lunas por la ventana redonda de una nave".to_string(),
    };
    let meta = BookMeta {
        title: "El viaje de Lucía".to_string(),
        target_age: Some("4-8 años".to_string()),
        theme: Some("Aventura espacial".to_string()),
    };

    println!("\n=== IMAGE PROMPT (página 3) ===\n");
    println!("{}", build_image_prompt(&page, &meta, &cast));
}
