use pagecraft_model::{Element, ElementKind, PageDocument, Section};

/// Options for HTML compilation
#[derive(Debug, Clone)]
pub struct CompileOptions {
    /// Document title
    pub title: String,
    /// `lang` attribute on the html tag
    pub lang: String,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            title: "My Site".to_string(),
            lang: "en".to_string(),
        }
    }
}

struct Context {
    buffer: String,
}

impl Context {
    fn new() -> Self {
        Self {
            buffer: String::new(),
        }
    }

    fn add(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn add_line(&mut self, text: &str) {
        self.add(text);
        self.add("\n");
    }

    fn get_output(self) -> String {
        self.buffer
    }
}

/// Compile a page document to a standalone HTML page. The output references
/// `styles.css` and `animations.js` by exact relative name; renaming either
/// file breaks the export contract.
pub fn compile_to_html(document: &PageDocument, options: &CompileOptions) -> String {
    let mut ctx = Context::new();

    ctx.add_line("<!DOCTYPE html>");
    ctx.add_line(&format!("<html lang=\"{}\">", escape_html(&options.lang)));
    ctx.add_line("<head>");
    ctx.add_line("  <meta charset=\"UTF-8\">");
    ctx.add_line("  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">");
    ctx.add_line(&format!("  <title>{}</title>", escape_html(&options.title)));
    ctx.add_line("  <link rel=\"stylesheet\" href=\"styles.css\">");
    ctx.add_line("</head>");
    ctx.add_line("<body>");

    if document.navbar.enabled {
        compile_navbar(document, &mut ctx);
    }

    for section in &document.sections {
        compile_section(section, &mut ctx);
    }

    ctx.add_line("  <script src=\"animations.js\"></script>");
    ctx.add_line("</body>");
    ctx.add("</html>");

    ctx.get_output()
}

fn compile_navbar(document: &PageDocument, ctx: &mut Context) {
    ctx.add_line("  <nav class=\"navbar\">");

    if let Some(logo) = document.navbar.logo() {
        ctx.add_line(&format!(
            "    <img src=\"{}\" alt=\"Logo\" class=\"navbar-logo\">",
            escape_html(logo)
        ));
    }

    // One anchor per section, in section order.
    ctx.add_line("    <div class=\"navbar-links\">");
    for section in &document.sections {
        ctx.add_line(&format!(
            "      <a href=\"#{}\">{}</a>",
            escape_html(&section.id),
            escape_html(&section.name)
        ));
    }
    ctx.add_line("    </div>");
    ctx.add_line("  </nav>");
}

fn compile_section(section: &Section, ctx: &mut Context) {
    let scroll_class = if section.style.animation_enabled() {
        " animate-on-scroll"
    } else {
        ""
    };

    ctx.add_line(&format!(
        "  <section class=\"section section-{}{}\" id=\"{}\">",
        escape_html(section.kind.as_str()),
        scroll_class,
        escape_html(&section.id)
    ));

    if let Some(video) = section.style.background_video() {
        ctx.add_line(&format!(
            "    <video class=\"section-bg-video\" autoplay muted loop playsinline><source src=\"{}\" type=\"video/mp4\"></video>",
            escape_html(video)
        ));
    }
    if section.style.background_overlay.is_some() {
        ctx.add_line("    <div class=\"section-overlay\"></div>");
    }

    ctx.add_line("    <div class=\"container\">");
    for element in section.sorted_elements() {
        compile_element(element, ctx);
    }
    ctx.add_line("    </div>");
    ctx.add_line("  </section>");
}

fn compile_element(element: &Element, ctx: &mut Context) {
    let anim_class = if element.style.animation_enabled() {
        format!(
            " animate-{}",
            element
                .style
                .animation_kind
                .unwrap_or(pagecraft_model::AnimationKind::Fade)
                .as_str()
        )
    } else {
        String::new()
    };
    let pos_class = format!(" pos-{}", element.position.as_str());

    match element.kind {
        ElementKind::Heading => {
            ctx.add_line(&format!(
                "      <h2 class=\"element-heading{}{}\">{}</h2>",
                anim_class,
                pos_class,
                escape_html(&element.content)
            ));
        }
        ElementKind::Text => {
            ctx.add_line(&format!(
                "      <p class=\"element-text{}{}\">{}</p>",
                anim_class,
                pos_class,
                escape_html(&element.content)
            ));
        }
        ElementKind::Button => {
            ctx.add_line(&format!(
                "      <a href=\"{}\" class=\"element-button{}{}\">{}</a>",
                escape_html(element.style.link()),
                anim_class,
                pos_class,
                escape_html(&element.content)
            ));
        }
        ElementKind::TermsLink => {
            ctx.add_line(&format!(
                "      <a href=\"{}\" class=\"element-link{}\">Terms of Use</a>",
                escape_html(element.style.link()),
                pos_class
            ));
        }
        ElementKind::PolicyLink => {
            ctx.add_line(&format!(
                "      <a href=\"{}\" class=\"element-link{}\">Privacy Policy</a>",
                escape_html(element.style.link()),
                pos_class
            ));
        }
        ElementKind::Image => {
            // Background-flagged media are expressed purely through CSS and
            // emit zero HTML nodes.
            if let Some(src) = element.style.src() {
                if !element.style.is_background() {
                    ctx.add_line(&format!(
                        "      <img src=\"{}\" alt=\"{}\" class=\"element-image{}{}\">",
                        escape_html(src),
                        escape_html(element.style.alt.as_deref().unwrap_or("")),
                        anim_class,
                        pos_class
                    ));
                }
            }
        }
        ElementKind::Video => {
            if let Some(src) = element.style.src() {
                if !element.style.is_background() {
                    ctx.add_line(&format!(
                        "      <video src=\"{}\" class=\"element-video{}{}\" controls></video>",
                        escape_html(src),
                        anim_class,
                        pos_class
                    ));
                }
            }
        }
    }
}

pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
