//! Presentation helpers: localized text selection, rarity colors and compact
//! record summaries. Independent of any UI toolkit.

use crate::data::{HideoutModule, Item, LocalizedText, Project, Quest, Rarity, RequirementPair};
use std::fmt::Write;

pub const FALLBACK_LANGUAGE: &str = "en";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

pub const NEUTRAL_GRAY: Rgb = Rgb(0x80, 0x80, 0x80);

impl Rarity {
    pub fn color(&self) -> Rgb {
        match self {
            Rarity::Common => Rgb(0x71, 0x74, 0x7B),
            Rarity::Uncommon => Rgb(0x26, 0xBF, 0x57),
            Rarity::Rare => Rgb(0x00, 0xA8, 0xF2),
            Rarity::Epic => Rgb(0xCC, 0x30, 0x99),
            Rarity::Legendary => Rgb(0xFF, 0xC6, 0x00),
        }
    }
}

/// Color for a rarity name as it appears in data or UI bindings.
/// Unknown or blank names get [`NEUTRAL_GRAY`].
pub fn rarity_color(name: &str) -> Rgb {
    name.parse::<Rarity>()
        .map(|r| r.color())
        .unwrap_or(NEUTRAL_GRAY)
}

/// Text in `lang`, else English, else the first language in the document.
pub fn localized<'a>(text: Option<&'a LocalizedText>, lang: &str) -> Option<&'a str> {
    let text = text?;
    text.get(lang)
        .or_else(|| text.get(FALLBACK_LANGUAGE))
        .or_else(|| text.0.values().next().map(String::as_str))
}

pub const UNNAMED: &str = "(unnamed)";

fn name_or_id<'a>(name: Option<&'a LocalizedText>, id: Option<&'a str>, lang: &str) -> &'a str {
    localized(name, lang).or(id).unwrap_or(UNNAMED)
}

fn push_pairs(out: &mut String, label: &str, pairs: Option<&Vec<RequirementPair>>) {
    let Some(pairs) = pairs.filter(|p| !p.is_empty()) else {
        return;
    };
    let rendered: Vec<String> = pairs
        .iter()
        .map(|p| format!("{}x{}", p.quantity, p.item_id.as_deref().unwrap_or("?")))
        .collect();
    let _ = writeln!(out, "{}: {}", label, rendered.join(", "));
}

pub fn format_item_summary(item: &Item, lang: &str) -> String {
    let mut out = String::new();
    let _ = write!(out, "{}", name_or_id(item.name.as_ref(), item.id.as_deref(), lang));
    if let Some(rarity) = item.rarity {
        let _ = write!(out, " [{}]", rarity.as_str());
    }
    out.push('\n');
    if let Some(kind) = &item.item_type {
        let _ = writeln!(out, "Type: {}", kind);
    }
    if let Some(desc) = localized(item.description.as_ref(), lang) {
        let _ = writeln!(out, "{}", desc);
    }
    let mut stats = Vec::new();
    if let Some(v) = item.value {
        stats.push(format!("value {}", v));
    }
    if let Some(w) = item.weight_kg {
        stats.push(format!("{}kg", w));
    }
    if let Some(s) = item.stack_size {
        stats.push(format!("stack {}", s));
    }
    if !stats.is_empty() {
        let _ = writeln!(out, "{}", stats.join(" | "));
    }
    if let Some(found) = &item.found_in {
        let _ = writeln!(out, "Found in: {}", found);
    }
    for (label, yields) in [("Recycles", &item.recycles_into), ("Salvages", &item.salvages_into)] {
        if let Some(yields) = yields.as_ref().filter(|y| !y.is_empty()) {
            let parts: Vec<String> = yields.iter().map(|(id, q)| format!("{}x{}", q, id)).collect();
            let _ = writeln!(out, "{}: {}", label, parts.join(", "));
        }
    }
    out
}

pub fn format_quest_summary(quest: &Quest, lang: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", name_or_id(quest.name.as_ref(), quest.id.as_deref(), lang));
    if let Some(trader) = &quest.trader {
        let _ = writeln!(out, "Trader: {}", trader);
    }
    if quest.xp > 0 {
        let _ = writeln!(out, "XP: {}", quest.xp);
    }
    if let Some(objectives) = &quest.objectives {
        for (i, objective) in objectives.iter().enumerate() {
            let text = Quest::objective_text(objective, lang).unwrap_or("(no text)");
            let _ = writeln!(out, "{}. {}", i + 1, text);
        }
    }
    push_pairs(&mut out, "Requires", quest.required_item_ids.as_ref());
    push_pairs(&mut out, "Rewards", quest.reward_item_ids.as_ref());
    if let Some(next) = quest.next_quest_ids.as_ref().filter(|n| !n.is_empty()) {
        let _ = writeln!(out, "Next: {}", next.join(", "));
    }
    out
}

pub fn format_project_summary(project: &Project, lang: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", name_or_id(project.name.as_ref(), project.id.as_deref(), lang));
    for phase in project.phases.iter().flatten() {
        let title = localized(phase.name.as_ref(), lang).unwrap_or("");
        let _ = writeln!(out, "Phase {}: {}", phase.phase, title);
        push_pairs(&mut out, "  Items", phase.requirement_item_ids.as_ref());
        if let Some(cats) = phase.requirement_categories.as_ref().filter(|c| !c.is_empty()) {
            let parts: Vec<String> = cats
                .iter()
                .map(|c| format!("{} {}", c.value_required, c.category.as_deref().unwrap_or("?")))
                .collect();
            let _ = writeln!(out, "  Value: {}", parts.join(", "));
        }
    }
    out
}

pub fn format_hideout_summary(module: &HideoutModule, lang: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} (max level {})",
        name_or_id(module.name.as_ref(), module.id.as_deref(), lang),
        module.max_level
    );
    for level in module.levels.iter().flatten() {
        let _ = writeln!(out, "Level {}", level.level);
        push_pairs(&mut out, "  Requires", level.requirement_item_ids.as_ref());
    }
    out
}
