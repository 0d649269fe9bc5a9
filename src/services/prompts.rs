//! System prompt catalog
//!
//! Maps each tool to the system prompt sent with the user's text. The catalog
//! is built once at startup and never mutated afterwards.

use crate::config::PromptsConfig;
use crate::models::ToolKind;

const MARKET_ANALYSIS_PROMPT: &str = "Ты эксперт по анализу рынка. Проведи краткий анализ рынка и конкурентов для следующего бизнеса или продукта. Укажи: основные сегменты рынка, ключевых конкурентов, примерный размер рынка, тренды и возможности.";

const BUSINESS_IDEA_PROMPT: &str = "Ты эксперт по генерации бизнес-идей. Предложи 5 инновационных бизнес-идей на основе следующих интересов или области. Для каждой идеи укажи: концепцию, потенциальную целевую аудиторию, примеры реализации и возможные источники дохода.";

const BUSINESS_MODEL_PROMPT: &str = "Ты эксперт по бизнес-моделированию. Создай структурированную бизнес-модель для описанного бизнеса. Включи следующие элементы: ценностное предложение, сегменты клиентов, каналы сбыта, взаимоотношения с клиентами, потоки доходов, ключевые ресурсы, ключевые виды деятельности, ключевые партнеры и структуру расходов.";

const CASE_STUDIES_PROMPT: &str = "Ты эксперт по бизнес-кейсам. Подбери 3-5 реальных кейсов успешных компаний, которые решали похожие проблемы или работали в указанной отрасли. Для каждого кейса укажи: название компании, краткое описание проблемы, примененное решение, и достигнутые результаты. Также добавь, как эти принципы можно применить к новому бизнесу.";

const CONSULTANT_PROMPT: &str = "Ты бизнес-консультант. Ответь на следующий запрос, предоставив полезную и профессиональную информацию.";

/// Immutable tool → system prompt mapping
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptCatalog {
    market_analysis: String,
    business_idea: String,
    business_model: String,
    case_studies: String,
    default: String,
}

impl PromptCatalog {
    /// Build the catalog, preferring configured overrides over the built-in texts
    pub fn from_config(config: &PromptsConfig) -> Self {
        let pick = |custom: &Option<String>, builtin: &str| {
            custom
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .unwrap_or(builtin)
                .to_string()
        };

        Self {
            market_analysis: pick(&config.market_analysis, MARKET_ANALYSIS_PROMPT),
            business_idea: pick(&config.business_idea, BUSINESS_IDEA_PROMPT),
            business_model: pick(&config.business_model, BUSINESS_MODEL_PROMPT),
            case_studies: pick(&config.case_studies, CASE_STUDIES_PROMPT),
            default: pick(&config.default, CONSULTANT_PROMPT),
        }
    }

    /// System prompt for a tool
    pub fn prompt_for(&self, tool: ToolKind) -> &str {
        match tool {
            ToolKind::MarketAnalysis => &self.market_analysis,
            ToolKind::BusinessIdea => &self.business_idea,
            ToolKind::BusinessModel => &self.business_model,
            ToolKind::CaseStudies => &self.case_studies,
        }
    }

    /// System prompt for an optional tool, falling back to the generic consultant
    pub fn resolve(&self, tool: Option<ToolKind>) -> &str {
        match tool {
            Some(tool) => self.prompt_for(tool),
            None => self.default_prompt(),
        }
    }

    /// Generic business-consultant prompt
    pub fn default_prompt(&self) -> &str {
        &self.default
    }
}

impl Default for PromptCatalog {
    fn default() -> Self {
        Self::from_config(&PromptsConfig::default())
    }
}
