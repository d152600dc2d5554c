use serde::{Deserialize, Serialize};

use crate::attributes;
use crate::resolver::{ItemHandle, ShellResolver};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ResolveOutcome {
    Success { mask: u32 },
    Failure { status: i32 },
}

// Scoped owner of a parsed item; releasing happens on drop so every
// exit path out of the success arm gives the reference back.
struct ParsedItem<'a> {
    resolver: &'a dyn ShellResolver,
    handle: Option<ItemHandle>,
}

impl<'a> ParsedItem<'a> {
    fn new(resolver: &'a dyn ShellResolver, handle: ItemHandle) -> Self {
        ParsedItem {
            resolver,
            handle: Some(handle),
        }
    }
}

impl Drop for ParsedItem<'_> {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.resolver.release(handle);
        }
    }
}

pub fn classify(resolver: &dyn ShellResolver, path: &str) -> ResolveOutcome {
    match resolver.parse(path, attributes::SFGAO_ALL) {
        Ok((handle, mask)) => {
            // the item is only needed long enough to read the mask
            let _parsed = ParsedItem::new(resolver, handle);
            ResolveOutcome::Success { mask }
        },
        Err(status) => ResolveOutcome::Failure { status },
    }
}

pub fn describe(outcome: &ResolveOutcome) -> Vec<String> {
    match outcome {
        ResolveOutcome::Failure { status } => {
            vec![format!("SHParseDisplayName failed: 0x{:08X}", *status as u32)]
        },
        ResolveOutcome::Success { mask } => {
            let mut lines = vec![format!("Attributes: 0x{:08X}", mask)];
            for label in attributes::set_flags(*mask) {
                lines.push(format!("    {}", label));
            }
            lines
        },
    }
}

pub fn report(path: &str, outcome: &ResolveOutcome) -> Vec<String> {
    let mut lines = vec![format!("Path: {}", path)];
    lines.append(&mut describe(outcome));
    lines
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ClassificationReport {
    pub path: String,
    pub status: String,
    pub mask: Option<String>,
    pub attributes: Vec<String>,
}

impl ClassificationReport {
    pub fn new(path: &str, outcome: &ResolveOutcome) -> Self {
        match outcome {
            ResolveOutcome::Failure { status } => ClassificationReport {
                path: String::from(path),
                status: format!("0x{:08X}", *status as u32),
                mask: None,
                attributes: vec![],
            },
            ResolveOutcome::Success { mask } => ClassificationReport {
                path: String::from(path),
                status: String::from("0x00000000"),
                mask: Some(format!("0x{:08X}", mask)),
                attributes: attributes::set_flags(*mask)
                    .iter()
                    .map(|label| String::from(*label))
                    .collect(),
            },
        }
    }
}
