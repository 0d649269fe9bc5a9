//! Tool model

use serde::{Deserialize, Serialize};

/// Business-assistance flow a user can pick from the web-app menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolKind {
    MarketAnalysis,
    BusinessIdea,
    BusinessModel,
    CaseStudies,
}

impl ToolKind {
    pub const ALL: [ToolKind; 4] = [
        ToolKind::MarketAnalysis,
        ToolKind::BusinessIdea,
        ToolKind::BusinessModel,
        ToolKind::CaseStudies,
    ];

    /// Stable identifier used in logs and configuration keys
    pub fn key(&self) -> &'static str {
        match self {
            ToolKind::MarketAnalysis => "market_analysis",
            ToolKind::BusinessIdea => "business_idea",
            ToolKind::BusinessModel => "business_model",
            ToolKind::CaseStudies => "case_studies",
        }
    }

    /// Short title sent when the tool is selected
    pub fn label(&self) -> &'static str {
        match self {
            ToolKind::MarketAnalysis => "🔍 Анализ рынка и конкурентов",
            ToolKind::BusinessIdea => "💡 Генерация бизнес-идей",
            ToolKind::BusinessModel => "📝 Составление бизнес-модели",
            ToolKind::CaseStudies => "📚 Подбор идей из кейсов",
        }
    }

    /// Prompt asking the user for the free-text input of this tool
    pub fn instruction(&self) -> &'static str {
        match self {
            ToolKind::MarketAnalysis => "Опишите ваш бизнес или продукт для анализа рынка:",
            ToolKind::BusinessIdea => {
                "Опишите область или интересы, для которых вы хотите получить идеи:"
            }
            ToolKind::BusinessModel => "Опишите ваш бизнес для составления бизнес-модели:",
            ToolKind::CaseStudies => {
                "Опишите проблему или отрасль для подбора релевантных кейсов:"
            }
        }
    }
}

impl std::fmt::Display for ToolKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}
