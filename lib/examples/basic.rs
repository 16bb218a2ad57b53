/// Basic example: encode a URL and print it in both rendering modes
use qr_forge::{EcLevel, RenderConfig, RenderMode, generate, render};

fn main() {
    println!("QR Forge - Basic Example");
    println!("========================\n");

    let text = "https://example.com";
    let ec_level = EcLevel::L;

    let matrix = match generate(text, ec_level) {
        Ok(matrix) => matrix,
        Err(err) => {
            eprintln!("Generation failed: {}", err);
            std::process::exit(1);
        }
    };

    println!("Encoded {:?} at level {}", text, ec_level);
    println!("Symbol size: {0}x{0} modules\n", matrix.size());

    // Block mode: two module-rows per printed row
    let block_config = RenderConfig::default();
    println!("Block mode:");
    println!("{}", render(&matrix, &block_config));

    // Text mode: one character per module
    let text_config = RenderConfig {
        mode: RenderMode::Text,
        ..Default::default()
    };
    println!("Text mode ('{}' / '{}'):", text_config.dark_char, text_config.light_char);
    println!("{}\n", render(&matrix, &text_config));

    // Inverted block mode, for dark-on-light terminals
    let inverted_config = RenderConfig {
        invert: true,
        ..Default::default()
    };
    println!("Inverted block mode:");
    println!("{}", render(&matrix, &inverted_config));
}
