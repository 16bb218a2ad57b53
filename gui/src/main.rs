mod app;

use app::QrForgeApp;
use eframe::egui;

fn main() -> Result<(), eframe::Error> {
    // Configure logging
    env_logger::init();

    // Configure viewport/window
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 720.0])
            .with_min_inner_size([700.0, 500.0])
            .with_title("QR Forge")
            .with_icon(load_icon()),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "QR Forge",
        options,
        Box::new(|cc| Ok(Box::new(QrForgeApp::new(cc)))),
    )
}

/// Load application icon (placeholder for now)
fn load_icon() -> egui::IconData {
    // Draw a QR finder pattern: green square ring with a filled center
    let icon_size = 32;
    let mut pixels = vec![0u8; icon_size * icon_size * 4];

    for y in 0..icon_size {
        for x in 0..icon_size {
            let idx = (y * icon_size + x) * 4;

            let ring = (2..30).contains(&x)
                && (2..30).contains(&y)
                && !((7..25).contains(&x) && (7..25).contains(&y));
            let center = (11..21).contains(&x) && (11..21).contains(&y);

            if ring || center {
                pixels[idx] = 74; // R
                pixels[idx + 1] = 222; // G
                pixels[idx + 2] = 128; // B
                pixels[idx + 3] = 255; // A
            } else {
                pixels[idx] = 0; // R
                pixels[idx + 1] = 0; // G
                pixels[idx + 2] = 0; // B
                pixels[idx + 3] = 255; // A
            }
        }
    }

    egui::IconData {
        rgba: pixels,
        width: icon_size as u32,
        height: icon_size as u32,
    }
}
