/// Scene Emotion Classifier — a fixed keyword heuristic that picks the
/// lighting descriptor for a page's dominant mood.
///
/// Deliberately simple: substring containment over a constant table, no
/// stemming, no fuzzy matching. Changing the matching rules would change
/// observable prompt output, so the table and tie-break order are part of
/// the contract.

/// One emotion category: its keyword list and its lighting descriptor.
struct EmotionCategory {
    name: &'static str,
    keywords: &'static [&'static str],
    lighting: &'static str,
}

/// Declaration order is the tie-break order: on equal match counts the
/// first declared category wins.
const CATEGORIES: &[EmotionCategory] = &[
    EmotionCategory {
        name: "happy",
        keywords: &[
            "feliz", "alegre", "alegría", "sonrisa", "sonríe", "risa", "ríe", "contento",
            "divertido", "celebra", "fiesta",
        ],
        lighting: "cálida y dorada, que transmite alegría",
    },
    EmotionCategory {
        name: "adventure",
        keywords: &[
            "aventura", "explorar", "descubrir", "viaje", "expedición", "mapa", "tesoro",
            "valiente", "atrever",
        ],
        lighting: "dinámica, con cielos amplios y colores vivos",
    },
    EmotionCategory {
        name: "calm",
        keywords: &[
            "tranquilo", "tranquila", "calma", "paz", "descansa", "suave", "dormir", "sueño",
            "silencio",
        ],
        lighting: "suave y serena, en tonos pastel",
    },
    EmotionCategory {
        name: "exciting",
        keywords: &[
            "emocionante", "increíble", "asombro", "maravilla", "mágico", "magia", "sorpresa",
            "destello",
        ],
        lighting: "vibrante, con destellos de asombro y magia",
    },
    EmotionCategory {
        name: "mysterious",
        keywords: &[
            "misterio", "misterioso", "secreto", "oculto", "extraño", "niebla", "sombra",
            "enigma",
        ],
        lighting: "tenue, con sombras suaves y reflejos azulados",
    },
    EmotionCategory {
        name: "learning",
        keywords: &[
            "aprende", "aprender", "lección", "enseña", "escuela", "pregunta", "curioso",
            "curiosidad",
        ],
        lighting: "clara y enfocada, que invita a la curiosidad",
    },
    EmotionCategory {
        name: "friendship",
        keywords: &[
            "amigo", "amiga", "amistad", "juntos", "compartir", "ayuda", "ayudar", "equipo",
            "abrazo",
        ],
        lighting: "cálida de atardecer, que envuelve a los personajes",
    },
    EmotionCategory {
        name: "tense",
        keywords: &[
            "miedo", "peligro", "oscuro", "tormenta", "perdido", "preocupado", "nervioso",
            "huir", "amenaza",
        ],
        lighting: "de contraste moderado, siempre amable para niños",
    },
];

/// Returned when no keyword from any category appears in the text.
pub const DEFAULT_LIGHTING: &str = "brillante y cálida, adecuada para una escena infantil";

/// Pick a lighting descriptor for the given page text.
///
/// Keywords match case-insensitively by substring containment against the
/// lower-cased text; each keyword counts once per category and keywords
/// are not deduplicated across categories. The category with the highest
/// count wins, first declared on ties; zero matches overall yields
/// [`DEFAULT_LIGHTING`].
pub fn classify_scene_lighting(page_text: &str) -> &'static str {
    let normalized = page_text.to_lowercase();

    let mut best_lighting = None;
    let mut best_count = 0usize;
    for category in CATEGORIES {
        let mut count = 0usize;
        for keyword in category.keywords {
            if normalized.contains(keyword) {
                count += 1;
            }
        }
        if count > best_count {
            best_count = count;
            best_lighting = Some(category.lighting);
        }
    }

    best_lighting.unwrap_or(DEFAULT_LIGHTING)
}

/// The lighting descriptor for a category name, if the category exists.
pub fn lighting_for_category(name: &str) -> Option<&'static str> {
    CATEGORIES
        .iter()
        .find(|category| category.name == name)
        .map(|category| category.lighting)
}
