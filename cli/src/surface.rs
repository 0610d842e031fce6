//! Terminal Mount Surface
//!
//! Renders section updates as plain text. Each update reprints its whole
//! section, matching the core's full-replace contract.

use wayfare_core::{Entry, MountSurface, NavItem, SectionBody, SectionUpdate};

/// Mount surface that prints sections to stdout.
pub struct TerminalSurface;

impl MountSurface for TerminalSurface {
    fn replace_section(&self, update: SectionUpdate) {
        let title = update
            .title
            .clone()
            .unwrap_or_else(|| update.section.title().to_string());
        println!("\n== {title} ==");

        match &update.body {
            SectionBody::Entries(entries) => {
                for entry in entries {
                    match entry {
                        Entry::Category { name, icon } => println!("  [{icon}] {name}"),
                        Entry::Card {
                            name,
                            image,
                            rating,
                        } => println!("  {name}  *{rating}  ({image})"),
                        Entry::Profile { name, avatar } => {
                            println!("  {name}");
                            println!("  avatar: {avatar}");
                        }
                    }
                }
            }
            SectionBody::Placeholder(label) => println!("  ({label})"),
            SectionBody::LoadError(label) => println!("  !! {label}"),
        }
    }

    fn replace_nav(&self, items: Vec<NavItem>) {
        let rendered: Vec<String> = items
            .iter()
            .map(|item| {
                if item.active {
                    format!("[{}]", item.label)
                } else {
                    item.label.clone()
                }
            })
            .collect();
        println!("\nnav: {}", rendered.join("  "));
    }
}
