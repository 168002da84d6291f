//! CSS emission from resolved style values
//!
//! Output is plain text for an inline `<style>` element. The generator holds
//! only its [`StyleConfig`]; the same values always produce the same bytes.

use crate::config::StyleConfig;
use crate::tokens::{with_opacity, BorderEffect};
use crate::values::{var, StyleValues};

/// Name of the glow animation and of its marker class
pub const GLOW_PULSE: &str = "glow-pulse";

const INDENT: &str = "  ";

/// Emits custom properties and rule blocks
#[derive(Clone, Debug, Default)]
pub struct CssGenerator {
    config: StyleConfig,
}

impl CssGenerator {
    pub fn new(config: StyleConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &StyleConfig {
        &self.config
    }

    /// One `--name: value;` line per resolved token.
    pub fn generate_css_variables(&self, values: &StyleValues) -> String {
        let mut out = String::new();
        for (name, value) in values.css_variables() {
            out.push_str(&format!("{name}: {value};\n"));
        }
        out
    }

    /// Variable block, base rules, and the border effect rules.
    pub fn generate_complete_style_block(&self, values: &StyleValues) -> String {
        let config = &self.config;
        let mut blocks = Vec::with_capacity(6);

        let declarations: Vec<String> = values
            .css_variables()
            .into_iter()
            .map(|(name, value)| format!("{name}: {value}"))
            .collect();
        blocks.push(rule(&config.scope_selector, &declarations, 0));

        blocks.push(rule(
            &config.page_selector,
            &[
                format!("background: var({})", var::PAGE_BACKGROUND),
                format!("color: var({})", var::BODY_FONT_COLOR),
                format!("font-family: var({})", var::BODY_FONT_FAMILY),
                format!("font-size: var({})", var::BODY_FONT_SIZE),
            ],
            0,
        ));

        blocks.push(rule(
            &config.heading_selector,
            &[
                format!("color: var({})", var::HEADING_FONT_COLOR),
                format!("font-family: var({})", var::HEADING_FONT_FAMILY),
                format!("font-size: var({})", var::HEADING_FONT_SIZE),
            ],
            0,
        ));

        blocks.push(rule(
            &config.widget_selector,
            &[
                format!("background: var({})", var::WIDGET_BACKGROUND),
                format!(
                    "border: var({}) solid var({})",
                    var::WIDGET_BORDER_WIDTH,
                    var::WIDGET_BORDER_COLOR
                ),
                format!("border-radius: var({})", var::BUTTON_CORNER_RADIUS),
                format!("margin-bottom: var({})", var::WIDGET_SPACING),
            ],
            0,
        ));

        match values.border_effect {
            BorderEffect::Glow => blocks.extend(self.glow_rules(values)),
            BorderEffect::Shadow => blocks.push(rule(
                &config.widget_selector,
                &[format!("box-shadow: var({})", var::WIDGET_SHADOW)],
                0,
            )),
            BorderEffect::None => {}
        }

        blocks.join("\n")
    }

    fn glow_rules(&self, values: &StyleValues) -> Vec<String> {
        let config = &self.config;
        let glow_selector = format!("{},\n.{GLOW_PULSE}", config.widget_selector);
        let blur = &values.glow_blur;
        let color = &values.glow_color;
        let dimmed = with_opacity(color, &values.glow_opacity);

        let mut rules = vec![
            rule(
                &glow_selector,
                &[
                    format!("box-shadow: 0 0 {blur} {color}"),
                    format!(
                        "animation: {GLOW_PULSE} {}ms ease-in-out infinite",
                        config.glow_pulse_ms
                    ),
                ],
                0,
            ),
            format!(
                "@keyframes {GLOW_PULSE} {{\n{}{}}}\n",
                rule("0%, 100%", &[format!("box-shadow: 0 0 {blur} {dimmed}")], 1),
                rule(
                    "50%",
                    &[format!("box-shadow: 0 0 calc({blur} * 1.5) {color}")],
                    1
                ),
            ),
        ];

        if config.respect_reduced_motion {
            rules.push(format!(
                "@media (prefers-reduced-motion: reduce) {{\n{}}}\n",
                rule(&glow_selector, &["animation: none".to_string()], 1),
            ));
        }

        rules
    }
}

/// `selector { decl; ... }` at the given nesting depth.
fn rule(selector: &str, declarations: &[String], depth: usize) -> String {
    let pad = INDENT.repeat(depth);
    let mut out = String::new();
    for (i, line) in selector.lines().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&pad);
        out.push_str(line.trim());
    }
    out.push_str(" {\n");
    for declaration in declarations {
        out.push_str(&format!("{pad}{INDENT}{declaration};\n"));
    }
    out.push_str(&format!("{pad}}}\n"));
    out
}
