//! The builtin activity catalog.
//!
//! Templates are read-only: the catalog is built in code, never persisted,
//! and sessions reference entries by title.

use serde::{Deserialize, Serialize};

/// Grouping tag shown on the activity card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityModule {
    Foundation,
    Grounding,
    EmotionRegulation,
    CognitiveReframing,
    StressRelief,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityTemplate {
    pub title: String,
    pub module: ActivityModule,
    /// Suggested length in minutes, shown on the card.
    pub duration_hint_min: u32,
    pub description: String,
    pub emoji: String,
    /// Gradient classes for graphical front ends.
    pub accent: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityCatalog {
    templates: Vec<ActivityTemplate>,
}

impl ActivityCatalog {
    /// The six guided exercises shipped with the app.
    pub fn builtin() -> Self {
        Self {
            templates: vec![
                ActivityTemplate {
                    title: "Anxiety Color Map".into(),
                    module: ActivityModule::Foundation,
                    duration_hint_min: 10,
                    description: "Map your anxiety feelings to colors".into(),
                    emoji: "🎨".into(),
                    accent: "from-purple-500 to-pink-500".into(),
                },
                ActivityTemplate {
                    title: "5-Senses Drawing".into(),
                    module: ActivityModule::Grounding,
                    duration_hint_min: 15,
                    description: "Ground yourself in the present moment".into(),
                    emoji: "👁️".into(),
                    accent: "from-blue-500 to-cyan-500".into(),
                },
                ActivityTemplate {
                    title: "Mandala Patterns".into(),
                    module: ActivityModule::Grounding,
                    duration_hint_min: 20,
                    description: "Meditative repetitive art creation".into(),
                    emoji: "🔵".into(),
                    accent: "from-indigo-500 to-blue-500".into(),
                },
                ActivityTemplate {
                    title: "Emotion Spectrum".into(),
                    module: ActivityModule::EmotionRegulation,
                    duration_hint_min: 15,
                    description: "Express your emotional range visually".into(),
                    emoji: "🌈".into(),
                    accent: "from-orange-500 to-red-500".into(),
                },
                ActivityTemplate {
                    title: "Worry Monster Transform".into(),
                    module: ActivityModule::CognitiveReframing,
                    duration_hint_min: 20,
                    description: "Turn anxiety into something manageable".into(),
                    emoji: "👹".into(),
                    accent: "from-green-500 to-teal-500".into(),
                },
                ActivityTemplate {
                    title: "Quick Sketching".into(),
                    module: ActivityModule::StressRelief,
                    duration_hint_min: 5,
                    description: "Fast & free art for urgent anxiety".into(),
                    emoji: "✏️".into(),
                    accent: "from-yellow-500 to-orange-500".into(),
                },
            ],
        }
    }

    pub fn all(&self) -> &[ActivityTemplate] {
        &self.templates
    }

    /// Look up a template by title, case-insensitively.
    pub fn find(&self, title: &str) -> Option<&ActivityTemplate> {
        self.templates
            .iter()
            .find(|t| t.title.eq_ignore_ascii_case(title))
    }
}

impl Default for ActivityCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
