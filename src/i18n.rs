//! Text catalog: (language, key) → display string.
//!
//! Lookup is deliberately lenient: a missing key resolves to an empty string
//! instead of an error, so a typo in an action-to-key mapping degrades to a
//! blank message body rather than a crashed handler. Parity between the
//! language tables is enforced by tests, not at runtime.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Supported display languages (code, human-readable name).
pub static SUPPORTED_LANGS: &[(&str, &str)] = &[("ru", "Русский"), ("en", "English")];

/// Display language of a user. The catalog is extensible, but the running
/// system recognizes exactly these two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lang {
    Ru,
    En,
}

impl Lang {
    /// Parses a stored two-letter code. Unsupported codes are rejected so the
    /// caller can fall back to auto-detection.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ru" => Some(Lang::Ru),
            "en" => Some(Lang::En),
            _ => None,
        }
    }

    /// Auto-detect rule for the platform locale hint: `ru` if the hint is
    /// exactly `ru`, else `en`. Intentionally coarse, no dialect matching.
    pub fn detect(locale_hint: Option<&str>) -> Self {
        match locale_hint {
            Some("ru") => Lang::Ru,
            _ => Lang::En,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Lang::Ru => "ru",
            Lang::En => "en",
        }
    }
}

/// Returns the catalog string for `key`, or `""` if the key is absent.
pub fn lookup(lang: Lang, key: &str) -> &'static str {
    let table = match lang {
        Lang::Ru => &*RU,
        Lang::En => &*EN,
    };
    table.get(key).copied().unwrap_or("")
}

static RU: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| RU_ENTRIES.iter().copied().collect());
static EN: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| EN_ENTRIES.iter().copied().collect());

const RU_ENTRIES: &[(&str, &str)] = &[
    (
        "welcome",
        "🦉 Добро пожаловать в FinTrack!\n\n\
         Управляй финансами легко и удобно.\n\
         Нажми кнопку ниже, чтобы начать 👇",
    ),
    (
        "help",
        "📚 Список команд FinTrack:\n\n\
         /start - Запустить приложение\n\
         /help - Список команд\n\
         /guide - Руководство по функциям\n\
         /tips - Советы по ведению бюджета\n\
         /why - Зачем вести учёт финансов\n\
         /language - Сменить язык\n\
         /version - Информация о версии\n\
         /donate - Поддержать проект\n\
         /support - Связаться с нами\n\n\
         Нажмите кнопку ниже, чтобы открыть приложение 👇",
    ),
    (
        "guide_title",
        "📖 Руководство по функциям FinTrack\n\nВыберите интересующую вас тему:",
    ),
    (
        "guide_accounts",
        "💳 Счета и порядок отображения\n\n\
         • На главном экране отображаются первые 4 счета\n\
         • Чтобы изменить порядок:\n  \
         Настройки → Управление счетами → перетащите карточки\n\
         • Все счета доступны на странице \"Управление счетами\"",
    ),
    (
        "guide_currency",
        "💱 Валюта и статистика\n\n\
         • Статистика считается только по операциям в валюте из настроек\n\
         • Валюта по умолчанию: рубль (₽)\n\
         • Операции в другой валюте не учитываются в графиках и аналитике\n\
         • Вы всегда можете изменить валюту для статистики в настройках",
    ),
    (
        "guide_debt",
        "📉 Погашение задолженностей\n\n\
         Правильный способ погашения долга:\n\
         1. Откройте функцию \"Перевод между счетами\"\n\
         2. Выберите счет, с которого гасите долг (источник)\n\
         3. Выберите долговой счет (получатель)\n\
         4. Укажите сумму погашения\n\n\
         ⚠️ Важно: Такие переводы учитываются в статистике расходов",
    ),
    (
        "guide_categories",
        "🏷️ Управление категориями\n\n\
         Как настроить категории:\n\
         • Настройки → Управление категориями\n\
         • Можно создавать новые категории\n\
         • Можно редактировать существующие\n\
         • Можно удалять (если нет привязанных транзакций)\n\n\
         Возможности кастомизации:\n\
         • 60+ эмодзи на выбор\n\
         • Раздельные категории для доходов и расходов",
    ),
    (
        "guide_filters",
        "🔍 Фильтры и поиск\n\n\
         Доступны в разделе \"История операций\":\n\n\
         Фильтры по периоду:\n\
         • Всё время / Неделя / Месяц / 3 месяца / Год\n\
         • Кастомный период (выбор дат)\n\n\
         Фильтры по типу:\n\
         • Все операции\n\
         • Только доходы\n\
         • Только расходы\n\
         • Только переводы\n\n\
         Дополнительно:\n\
         • Фильтр по счетам (один или несколько)\n\
         • Поиск по описанию и категории\n\
         • Комбинирование всех фильтров",
    ),
    (
        "guide_export",
        "💾 Экспорт данных\n\n\
         Как экспортировать транзакции:\n\
         1. Откройте приложение\n\
         2. Перейдите в Настройки\n\
         3. Найдите раздел \"Данные\"\n\
         4. Нажмите \"Экспортировать данные\"\n\n\
         Что входит в экспорт:\n\
         • Дата и время операции\n\
         • Тип (доход/расход/перевод)\n\
         • Категория\n\
         • Счёт\n\
         • Сумма\n\
         • Описание\n\n\
         Формат: CSV (UTF-8)\n\
         Использование: Excel, Google Sheets, Numbers",
    ),
    (
        "guide_edit",
        "✏️ Редактирование операций\n\n\
         Как изменить или удалить транзакцию:\n\
         1. Откройте \"История операций\"\n\
         2. Нажмите на нужную транзакцию\n\
         3. В открывшемся окне доступны:\n   \
         • Просмотр всех деталей\n   \
         • Кнопка \"Удалить операцию\"\n\n\
         Что можно посмотреть:\n\
         • Дата и время операции\n\
         • Тип и категория\n\
         • Счёт и сумма\n\
         • Описание (если есть)",
    ),
    (
        "guide_notifications",
        "🔔 Уведомления\n\n\
         Как настроить напоминания:\n\
         • Настройки → Уведомления\n\
         • Включите ежедневное напоминание о записи расходов\n\
         • Выберите удобное время\n\n\
         Бот пришлёт сообщение, если за день не было записано ни одной операции.",
    ),
    (
        "tips",
        "💡 Советы по ведению бюджета\n\n\
         • Записывайте операции сразу — память подводит уже к вечеру\n\
         • Заведите отдельные категории для регулярных и разовых трат\n\
         • Раз в неделю просматривайте статистику расходов\n\
         • Планируйте крупные покупки заранее через отдельный счёт\n\
         • Маленькие траты тоже считаются: кофе за месяц — это заметная сумма",
    ),
    (
        "why",
        "🤔 Зачем вести учёт финансов\n\n\
         Учёт — это не про ограничения, а про понимание:\n\n\
         • Вы видите, куда на самом деле уходят деньги\n\
         • Проще замечать ненужные подписки и повторяющиеся траты\n\
         • Накопления перестают быть случайностью\n\
         • Решения о крупных покупках принимаются спокойнее\n\n\
         Начните с малого: записывайте всё хотя бы одну неделю.",
    ),
    ("language_prompt", "🌍 Выберите язык:"),
    ("language_set", "✅ Язык переключён на русский."),
    (
        "version",
        "FinTrack v1.0 (BETA) 🚀\n\
         Последнее обновление: 30 октября 2025\n\n\
         Нажмите кнопку ниже, чтобы открыть приложение 👇",
    ),
    (
        "donate",
        "💝 Поддержать проект FinTrack\n\n\
         Проект развивается на донатной основе. Спасибо за вашу поддержку!\n\n\
         Способы поддержки:\n\n\
         💳 СБП (Т-банк)\n\
         +79939009598\n\n\
         🏦 TBC Bank IBAN (только GEL)\n\
         GE15TB7537945061200012\n\n\
         💎 TON\n\
         UQBagnAhrTd6AJbQg8zfP9oyIFU_8a5RgX_78k64jBVxLLEJ\n\n\
         💵 USDT (TRC20)\n\
         TSG71BQmZL2E6q46u39PfUQSjaWNcENmRm",
    ),
    (
        "support",
        "🛟 Поддержка FinTrack\n\n\
         Нашли ошибку или есть идея? Напишите нам: @fintrack_support\n\
         Обычно отвечаем в течение суток.",
    ),
    ("fallback", "Используйте /help для справки или откройте приложение 👇"),
    (
        "error_generic",
        "Что-то пошло не так. Попробуйте ещё раз или откройте приложение 👇",
    ),
    ("btn_open_app", "💰 Открыть FinTrack"),
    ("btn_help", "📚 Справка"),
    ("btn_back", "← Назад к темам"),
    ("btn_guide_accounts", "💳 Счета и порядок отображения"),
    ("btn_guide_currency", "💱 Валюта и статистика"),
    ("btn_guide_debt", "📉 Погашение задолженностей"),
    ("btn_guide_categories", "🏷️ Управление категориями"),
    ("btn_guide_filters", "🔍 Фильтры и поиск"),
    ("btn_guide_export", "💾 Экспорт данных"),
    ("btn_guide_edit", "✏️ Редактирование операций"),
    ("btn_guide_notifications", "🔔 Уведомления"),
    ("btn_lang_ru", "🇷🇺 Русский"),
    ("btn_lang_en", "🇺🇸 English"),
];

const EN_ENTRIES: &[(&str, &str)] = &[
    (
        "welcome",
        "🦉 Welcome to FinTrack!\n\n\
         Manage your money with ease.\n\
         Tap the button below to get started 👇",
    ),
    (
        "help",
        "📚 FinTrack commands:\n\n\
         /start - Launch the app\n\
         /help - Command list\n\
         /guide - Feature guide\n\
         /tips - Budgeting tips\n\
         /why - Why track your finances\n\
         /language - Change language\n\
         /version - Version info\n\
         /donate - Support the project\n\
         /support - Contact us\n\n\
         Tap the button below to open the app 👇",
    ),
    ("guide_title", "📖 FinTrack feature guide\n\nPick a topic:"),
    (
        "guide_accounts",
        "💳 Accounts & display order\n\n\
         • The home screen shows your first 4 accounts\n\
         • To reorder them:\n  \
         Settings → Manage accounts → drag the cards\n\
         • All accounts are available on the \"Manage accounts\" page",
    ),
    (
        "guide_currency",
        "💱 Currency & statistics\n\n\
         • Statistics only count transactions in the currency from your settings\n\
         • Default currency: ruble (₽)\n\
         • Transactions in other currencies are excluded from charts and analytics\n\
         • You can change the statistics currency in settings at any time",
    ),
    (
        "guide_debt",
        "📉 Paying off debt\n\n\
         The right way to pay down a debt:\n\
         1. Open \"Transfer between accounts\"\n\
         2. Pick the account you are paying from (source)\n\
         3. Pick the debt account (recipient)\n\
         4. Enter the repayment amount\n\n\
         ⚠️ Note: these transfers count towards your spending statistics",
    ),
    (
        "guide_categories",
        "🏷️ Managing categories\n\n\
         How to set up categories:\n\
         • Settings → Manage categories\n\
         • Create new categories\n\
         • Edit existing ones\n\
         • Delete them (when no transactions are attached)\n\n\
         Customization:\n\
         • 60+ emoji to choose from\n\
         • Separate categories for income and expenses",
    ),
    (
        "guide_filters",
        "🔍 Filters & search\n\n\
         Available in \"Transaction history\":\n\n\
         Period filters:\n\
         • All time / Week / Month / 3 months / Year\n\
         • Custom period (date range)\n\n\
         Type filters:\n\
         • All transactions\n\
         • Income only\n\
         • Expenses only\n\
         • Transfers only\n\n\
         Also:\n\
         • Filter by accounts (one or several)\n\
         • Search by description and category\n\
         • Combine all filters together",
    ),
    (
        "guide_export",
        "💾 Data export\n\n\
         How to export your transactions:\n\
         1. Open the app\n\
         2. Go to Settings\n\
         3. Find the \"Data\" section\n\
         4. Tap \"Export data\"\n\n\
         The export includes:\n\
         • Date and time\n\
         • Type (income/expense/transfer)\n\
         • Category\n\
         • Account\n\
         • Amount\n\
         • Description\n\n\
         Format: CSV (UTF-8)\n\
         Works with: Excel, Google Sheets, Numbers",
    ),
    (
        "guide_edit",
        "✏️ Editing transactions\n\n\
         How to change or delete a transaction:\n\
         1. Open \"Transaction history\"\n\
         2. Tap the transaction\n\
         3. The detail view offers:\n   \
         • All transaction details\n   \
         • A \"Delete transaction\" button\n\n\
         You can review:\n\
         • Date and time\n\
         • Type and category\n\
         • Account and amount\n\
         • Description (if any)",
    ),
    (
        "guide_notifications",
        "🔔 Notifications\n\n\
         How to set up reminders:\n\
         • Settings → Notifications\n\
         • Enable the daily expense-logging reminder\n\
         • Pick a convenient time\n\n\
         The bot will ping you if no transactions were recorded that day.",
    ),
    (
        "tips",
        "💡 Budgeting tips\n\n\
         • Record transactions right away — memory fades by the evening\n\
         • Keep separate categories for recurring and one-off spending\n\
         • Review your spending statistics once a week\n\
         • Plan large purchases ahead with a dedicated account\n\
         • Small expenses add up: a month of coffee is real money",
    ),
    (
        "why",
        "🤔 Why track your finances\n\n\
         Tracking is not about restrictions, it is about clarity:\n\n\
         • You see where the money actually goes\n\
         • Unused subscriptions and repeat spending become visible\n\
         • Savings stop being an accident\n\
         • Big purchase decisions get calmer\n\n\
         Start small: record everything for just one week.",
    ),
    ("language_prompt", "🌍 Choose your language:"),
    ("language_set", "✅ Language switched to English."),
    (
        "version",
        "FinTrack v1.0 (BETA) 🚀\n\
         Last update: October 30, 2025\n\n\
         Tap the button below to open the app 👇",
    ),
    (
        "donate",
        "💝 Support FinTrack\n\n\
         The project is donation-funded. Thank you for your support!\n\n\
         Ways to help:\n\n\
         💳 SBP (T-Bank)\n\
         +79939009598\n\n\
         🏦 TBC Bank IBAN (GEL only)\n\
         GE15TB7537945061200012\n\n\
         💎 TON\n\
         UQBagnAhrTd6AJbQg8zfP9oyIFU_8a5RgX_78k64jBVxLLEJ\n\n\
         💵 USDT (TRC20)\n\
         TSG71BQmZL2E6q46u39PfUQSjaWNcENmRm",
    ),
    (
        "support",
        "🛟 FinTrack support\n\n\
         Found a bug or have an idea? Message us: @fintrack_support\n\
         We usually reply within a day.",
    ),
    ("fallback", "Use /help for the command list or open the app 👇"),
    ("error_generic", "Something went wrong. Try again or open the app 👇"),
    ("btn_open_app", "💰 Open FinTrack"),
    ("btn_help", "📚 Help"),
    ("btn_back", "← Back to topics"),
    ("btn_guide_accounts", "💳 Accounts & display order"),
    ("btn_guide_currency", "💱 Currency & statistics"),
    ("btn_guide_debt", "📉 Paying off debt"),
    ("btn_guide_categories", "🏷️ Managing categories"),
    ("btn_guide_filters", "🔍 Filters & search"),
    ("btn_guide_export", "💾 Data export"),
    ("btn_guide_edit", "✏️ Editing transactions"),
    ("btn_guide_notifications", "🔔 Notifications"),
    ("btn_lang_ru", "🇷🇺 Русский"),
    ("btn_lang_en", "🇺🇸 English"),
];
