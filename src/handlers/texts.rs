//! User-facing texts and keyboards

use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup, WebAppInfo};

pub const WELCOME: &str = "Добро пожаловать в AI Factory! Выберите инструмент из меню.";
pub const OPEN_TOOLS: &str = "Открыть инструменты";
pub const OPEN_TOOLS_AGAIN: &str = "Открыть инструменты заново";
pub const CHOOSE_FROM_MENU: &str = "Выберите опцию из меню инструментов";
pub const GENERIC_ERROR: &str = "Произошла ошибка. Пожалуйста, попробуйте позже.";
pub const PROCESSING: &str = "⏳ Анализирую информацию, это может занять некоторое время...";
pub const COMPLETION_FAILED: &str = "Произошла ошибка при анализе. Пожалуйста, попробуйте позже.";
pub const RUN_ANOTHER: &str = "Хотите выполнить ещё один запрос? Нажмите кнопку ниже";

pub const HELP: &str = "🤖 AI Factory\n\n\
    /start - открыть меню инструментов\n\
    /help - показать эту подсказку\n\n\
    Выберите инструмент в меню, затем отправьте описание вашего бизнеса \
    или задачи одним сообщением. Ответ придёт через несколько секунд.";

pub const INLINE_TITLE: &str = "Открыть бизнес-инструменты";
pub const INLINE_DESCRIPTION: &str = "Нажмите, чтобы открыть AI Factory";
pub const INLINE_MESSAGE: &str = "Я хочу воспользоваться бизнес-инструментами AI Factory!";

/// Single-button keyboard opening the tools web app
pub fn tools_keyboard(label: &str, tools_url: &url::Url) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![vec![InlineKeyboardButton::web_app(
        label,
        WebAppInfo { url: tools_url.clone() },
    )]])
}
