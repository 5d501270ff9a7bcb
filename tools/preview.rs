/// Preview — compose prompts from RON cast and theme files.
///
/// Usage: preview --cast <path> [--theme <path>] [--pages <n>]
///                [--book-type <tag>] [--page-text <text>] [--page-prompt <text>]
///
/// Prints the system prompt and user prompt for the loaded cast; when
/// --page-text is given, also prints the image prompt for a synthetic
/// page built from --page-text / --page-prompt.
use std::path::Path;

use utale_prompts::core::image_prompt::build_image_prompt;
use utale_prompts::core::narrative_prompt::{build_system_prompt, build_user_prompt};
use utale_prompts::schema::book::{BookMeta, Page};
use utale_prompts::schema::character::load_cast_from_ron;
use utale_prompts::schema::theme::BookTheme;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        print_usage();
        return;
    }

    let mut cast_path = None;
    let mut theme_path = None;
    let mut pages: u32 = 5;
    let mut book_type = None;
    let mut page_text = None;
    let mut page_prompt = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--cast" if i + 1 < args.len() => {
                i += 1;
                cast_path = Some(args[i].clone());
            }
            "--theme" if i + 1 < args.len() => {
                i += 1;
                theme_path = Some(args[i].clone());
            }
            "--pages" if i + 1 < args.len() => {
                i += 1;
                pages = args[i].parse().unwrap_or(5);
            }
            "--book-type" if i + 1 < args.len() => {
                i += 1;
                book_type = Some(args[i].clone());
            }
            "--page-text" if i + 1 < args.len() => {
                i += 1;
                page_text = Some(args[i].clone());
            }
            "--page-prompt" if i + 1 < args.len() => {
                i += 1;
                page_prompt = Some(args[i].clone());
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let cast_path = match cast_path {
        Some(path) => path,
        None => {
            eprintln!("--cast is required");
            print_usage();
            std::process::exit(1);
        }
    };

    let cast = match load_cast_from_ron(Path::new(&cast_path)) {
        Ok(cast) if !cast.is_empty() => cast,
        Ok(_) => {
            eprintln!("Cast file {} contains no characters", cast_path);
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("ERROR loading cast {}: {}", cast_path, e);
            std::process::exit(1);
        }
    };

    let theme = match theme_path {
        Some(ref path) => match BookTheme::load_from_ron(Path::new(path)) {
            Ok(theme) => theme,
            Err(e) => {
                eprintln!("ERROR loading theme {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => BookTheme {
            name: "Aventura".to_string(),
            age_range: None,
            description: String::new(),
        },
    };

    println!("Loaded {} characters (main: {})", cast.len(), cast[0].name);
    println!("Theme: {} ({})\n", theme.name, theme.age_range_or_default());

    println!("=== SYSTEM PROMPT ===\n");
    println!("{}\n", build_system_prompt(book_type.as_deref()));

    let (main_character, supporting) = match cast.split_first() {
        Some(split) => split,
        None => unreachable!("cast checked non-empty above"),
    };
    println!("=== USER PROMPT ===\n");
    println!(
        "{}",
        build_user_prompt(main_character, supporting, &theme, pages, None)
    );

    if let Some(text) = page_text {
        let page = Page {
            page_number: 1,
            text,
            image_prompt: page_prompt.unwrap_or_default(),
        };
        let meta = BookMeta {
            title: theme.name.clone(),
            target_age: theme.age_range.clone(),
            theme: Some(theme.name.clone()),
        };
        println!("\n=== IMAGE PROMPT ===\n");
        println!("{}", build_image_prompt(&page, &meta, &cast));
    }
}

fn print_usage() {
    println!("Preview — compose prompts from RON cast and theme files.");
    println!();
    println!("Usage: preview --cast <path> [--theme <path>] [--pages <n>]");
    println!("               [--book-type <tag>] [--page-text <text>] [--page-prompt <text>]");
    println!();
    println!("  --cast <path>        RON file with a list of characters (first = main)");
    println!("  --theme <path>       RON file with a theme definition");
    println!("  --pages <n>          Content page count (default: 5)");
    println!("  --book-type <tag>    adventure, fantasy, or educational");
    println!("  --page-text <text>   Page text for an image prompt preview");
    println!("  --page-prompt <text> Scene description for the image prompt preview");
}
