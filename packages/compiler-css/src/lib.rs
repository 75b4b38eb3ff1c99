//! CSS serializer: `PageDocument` → `styles.css`.
//!
//! Output is fixed boilerplate (reset, container, section base, position
//! utilities, navbar layout, animation classes) followed by one rule block
//! per section keyed by its id. Generation is deterministic and total:
//! every field read falls back to a documented default.

use pagecraft_model::{NavbarConfig, PageDocument, Section};

/// Compile a page document to a standalone stylesheet.
pub fn compile_to_css(document: &PageDocument) -> String {
    let mut css = String::new();

    css.push_str(BASE_STYLES);
    css.push_str(&navbar_styles(&document.navbar));
    css.push_str(ANIMATION_STYLES);

    for section in &document.sections {
        css.push_str(&section_styles(section));
    }

    css
}

const BASE_STYLES: &str = "\
* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

body {
  font-family: 'Inter', -apple-system, BlinkMacSystemFont, sans-serif;
  line-height: 1.6;
}

.container {
  max-width: 1200px;
  margin: 0 auto;
  padding: 0 20px;
  position: relative;
  z-index: 1;
}

.section {
  position: relative;
  padding: 80px 0;
  overflow: hidden;
}

.section-bg-video {
  position: absolute;
  top: 50%;
  left: 50%;
  min-width: 100%;
  min-height: 100%;
  transform: translate(-50%, -50%);
  object-fit: cover;
  z-index: 0;
}

.section-overlay {
  position: absolute;
  top: 0;
  left: 0;
  right: 0;
  bottom: 0;
  z-index: 0;
}

/* Position classes */
.pos-left { text-align: left; }
.pos-center { text-align: center; }
.pos-right { text-align: right; }

";

/// Navbar layout derived from the navbar configuration. Emitted even when
/// the navbar is disabled so the stylesheet stays a fixed shape.
fn navbar_styles(navbar: &NavbarConfig) -> String {
    let mut css = String::new();

    css.push_str("/* Navbar */\n.navbar {\n");
    css.push_str(&format!("  position: {};\n", navbar.position().as_str()));
    css.push_str(
        "  top: 0;\n  left: 0;\n  right: 0;\n  z-index: 1000;\n  display: flex;\n  align-items: center;\n  justify-content: space-between;\n  padding: 16px 32px;\n",
    );
    if navbar.transparent() {
        css.push_str("  background-color: transparent;\n");
    } else {
        css.push_str(&format!(
            "  background-color: {};\n",
            navbar.background_color()
        ));
    }
    if navbar.blur() {
        css.push_str("  backdrop-filter: blur(10px);\n");
    }
    if navbar.floating() {
        css.push_str(&format!(
            "  margin: 16px;\n  border-radius: {};\n",
            navbar.border_radius()
        ));
    }
    css.push_str("}\n\n");

    css.push_str(
        ".navbar-logo {\n  height: 40px;\n  width: auto;\n}\n\n.navbar-links {\n  display: flex;\n  gap: 24px;\n}\n\n.navbar-links a {\n  color: #ffffff;\n  text-decoration: none;\n  transition: opacity 0.3s;\n}\n\n.navbar-links a:hover {\n  opacity: 0.8;\n}\n\n",
    );

    css
}

const ANIMATION_STYLES: &str = "\
/* Animation classes */
.animate-fade { opacity: 0; transition: opacity 0.6s ease-out; }
.animate-fade.visible { opacity: 1; }

.animate-slide-up { opacity: 0; transform: translateY(30px); transition: all 0.6s ease-out; }
.animate-slide-up.visible { opacity: 1; transform: translateY(0); }

.animate-slide-down { opacity: 0; transform: translateY(-30px); transition: all 0.6s ease-out; }
.animate-slide-down.visible { opacity: 1; transform: translateY(0); }

.animate-scale { opacity: 0; transform: scale(0.9); transition: all 0.6s ease-out; }
.animate-scale.visible { opacity: 1; transform: scale(1); }

.animate-on-scroll { opacity: 0; transform: translateY(20px); transition: all 0.6s ease-out; }
.animate-on-scroll.visible { opacity: 1; transform: translateY(0); }

";

/// One rule block per section. Background emission order is fixed as
/// color, then gradient, then image, so when several are set the last one
/// present wins under the standard cascade: image > gradient > color.
fn section_styles(section: &Section) -> String {
    let mut css = String::new();
    let style = &section.style;

    css.push_str(&format!("#{} {{\n", section.id));

    if let Some(color) = style.background_color.as_deref() {
        if color != "transparent" {
            css.push_str(&format!("  background-color: {};\n", color));
        }
    }
    if let Some(gradient) = style.background_gradient.as_deref() {
        css.push_str(&format!("  background: {};\n", gradient));
    }
    if let Some(image) = style.background_image.as_deref() {
        css.push_str(&format!("  background-image: url('{}');\n", image));
        css.push_str("  background-size: cover;\n");
        css.push_str("  background-position: center;\n");
    }

    css.push_str(&format!("  padding: {} 0;\n", style.padding()));
    css.push_str(&format!("  text-align: {};\n", style.text_align().as_str()));
    if let Some(text_color) = style.text_color.as_deref() {
        css.push_str(&format!("  color: {};\n", text_color));
    }
    css.push_str("}\n\n");

    // Overlay is its own rule on the descendant, keeping the section
    // block intact.
    if let Some(overlay) = style.background_overlay.as_deref() {
        css.push_str(&format!(
            "#{} .section-overlay {{\n  background: {};\n}}\n\n",
            section.id, overlay
        ));
    }

    css
}
