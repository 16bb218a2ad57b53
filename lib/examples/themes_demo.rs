/// Theme demo: render the same QR code with every preset character theme
use qr_forge::themes::PRESET_THEMES;
use qr_forge::{EcLevel, generate, render_text};

fn main() {
    println!("QR Forge - Theme Demo");
    println!("=====================\n");

    let matrix = generate("HELLO WORLD", EcLevel::M).expect("Failed to generate QR code");

    for theme in &PRESET_THEMES {
        println!(
            "{} ('{}' / '{}'):",
            theme.name, theme.dark_char, theme.light_char
        );
        println!(
            "{}\n",
            render_text(&matrix, theme.dark_char, theme.light_char, false)
        );
    }
}
