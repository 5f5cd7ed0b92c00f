use chrono::{Datelike, Months, NaiveDate};
use tokio::time::Instant;

use crate::calendar::{
    Dataset, Event, EventFilter, EventId, EventStore, ReferenceList, Selection,
};
use crate::contact::ContactForm;
use crate::form::EventForm;
use crate::storage::config::UiConfig;
use crate::storage::preferences::{self, KeyValueStore, MemoryStore};
use crate::timers::{Deferred, MonthStep, Timers};
use crate::toast::{ToastKind, ToastQueue};
use crate::ui::month_view::{self, MonthStats};
use crate::ui::theme::Theme;

#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    Normal,
    Insert,
    Command,
    Confirm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Calendar,
    About,
    Contact,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Calendar, Section::About, Section::Contact];

    pub fn title(self) -> &'static str {
        match self {
            Section::Calendar => "Calendar",
            Section::About => "About",
            Section::Contact => "Contact",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Section::Calendar => Section::About,
            Section::About => Section::Contact,
            Section::Contact => Section::Calendar,
        }
    }
}

pub struct AppState {
    pub mode: Mode,
    pub section: Section,
    pub today: NaiveDate,
    pub selected_date: NaiveDate,
    pub store: EventStore,
    pub categories: ReferenceList,
    pub priorities: ReferenceList,
    pub filter: EventFilter,
    pub theme: Theme,
    pub event_form: Option<EventForm>,
    pub contact_form: ContactForm,
    pub details_event_id: Option<EventId>,
    pub delete_confirmation_event_id: Option<EventId>,
    pub selected_event_index: usize,
    pub command_buffer: String,
    pub show_help: bool,
    pub help_scroll: usize,
    pub toasts: ToastQueue,
    pub timers: Timers,
    pub month_transition: Option<MonthStep>,
    pub ui_config: UiConfig,
    preferences: Box<dyn KeyValueStore>,
}

impl AppState {
    pub fn new(dataset: Dataset, today: NaiveDate) -> Self {
        Self {
            mode: Mode::Normal,
            section: Section::Calendar,
            today,
            selected_date: today,
            store: EventStore::with_events(dataset.events),
            categories: dataset.categories,
            priorities: dataset.priorities,
            filter: EventFilter::default(),
            theme: Theme::default(),
            event_form: None,
            contact_form: ContactForm::new(),
            details_event_id: None,
            delete_confirmation_event_id: None,
            selected_event_index: 0,
            command_buffer: String::new(),
            show_help: false,
            help_scroll: 0,
            toasts: ToastQueue::new(),
            timers: Timers::new(),
            month_transition: None,
            ui_config: crate::storage::config::Config::default().ui,
            preferences: Box::new(MemoryStore::default()),
        }
    }

    pub fn with_ui_config(mut self, ui_config: UiConfig) -> Self {
        self.ui_config = ui_config;
        self
    }

    /// Uses `store` for the theme preference and applies the saved theme.
    pub fn with_preferences(mut self, store: Box<dyn KeyValueStore>) -> Self {
        self.theme = preferences::load_theme(&*store);
        self.preferences = store;
        self
    }

    pub fn filtered_events(&self) -> Vec<&Event> {
        self.filter.apply(self.store.iter())
    }

    /// Filtered events on `date`, ordered by start time.
    pub fn get_events_for_date(&self, date: NaiveDate) -> Vec<&Event> {
        let mut events: Vec<&Event> = self
            .filtered_events()
            .into_iter()
            .filter(|event| event.is_on(date))
            .collect();
        events.sort_by_key(|e| e.time);
        events
    }

    pub fn get_selected_event(&self) -> Option<&Event> {
        let events = self.get_events_for_date(self.selected_date);
        events.get(self.selected_event_index).copied()
    }

    pub fn move_event_selection_down(&mut self) {
        let event_count = self.get_events_for_date(self.selected_date).len();
        if event_count > 0 && self.selected_event_index < event_count - 1 {
            self.selected_event_index += 1;
        }
    }

    pub fn move_event_selection_up(&mut self) {
        if self.selected_event_index > 0 {
            self.selected_event_index -= 1;
        }
    }

    pub fn reset_event_selection(&mut self) {
        self.selected_event_index = 0;
    }

    pub fn select_date(&mut self, date: NaiveDate) {
        self.selected_date = date;
        self.reset_event_selection();
    }

    pub fn stats(&self) -> MonthStats {
        month_view::calculate_stats(
            self.store.as_slice(),
            self.selected_date.year(),
            self.selected_date.month(),
            self.today,
        )
    }

    pub fn notify(&mut self, kind: ToastKind, title: impl Into<String>, description: Option<String>) {
        let id = self.toasts.push(kind, title, description);
        let after = self.ui_config.toast_duration();
        self.timers.schedule(Instant::now(), after, Deferred::DismissToast(id));
    }

    pub fn open_event_form(&mut self, title: String) {
        self.event_form = Some(EventForm::new(self.selected_date, title));
        self.mode = Mode::Insert;
    }

    pub fn cancel_event_form(&mut self) {
        self.event_form = None;
        self.mode = Mode::Normal;
    }

    /// Adds the event when the form validates; otherwise the form stays open
    /// with its field errors and the store is untouched.
    pub fn submit_event_form(&mut self) -> Option<EventId> {
        let draft = self.event_form.as_mut()?.submit()?;
        let date = draft.date;
        let title = draft.title.clone();
        let id = match self.store.add(draft) {
            Ok(id) => id,
            Err(e) => {
                tracing::error!("Failed to create event: {}", e);
                self.notify(ToastKind::Error, "Could not create event", Some(e.to_string()));
                return None;
            }
        };
        tracing::info!("Created event {} on {}", id, date);

        self.event_form = None;
        self.mode = Mode::Normal;
        self.select_date(date);
        self.notify(ToastKind::Success, "Event created", Some(title));
        Some(id)
    }

    pub fn open_details(&mut self) {
        if let Some(event) = self.get_selected_event() {
            self.details_event_id = Some(event.id);
        }
    }

    pub fn close_details(&mut self) {
        self.details_event_id = None;
    }

    pub fn details_event(&self) -> Option<&Event> {
        self.details_event_id.and_then(|id| self.store.get(id))
    }

    pub fn request_delete(&mut self) {
        if let Some(id) = self.details_event_id {
            self.delete_confirmation_event_id = Some(id);
            self.mode = Mode::Confirm;
        }
    }

    pub fn cancel_delete(&mut self) {
        self.delete_confirmation_event_id = None;
        self.mode = Mode::Normal;
    }

    pub fn confirm_delete(&mut self) -> Option<Event> {
        let id = self.delete_confirmation_event_id.take()?;
        self.mode = Mode::Normal;
        let removed = self.store.remove(id);
        match &removed {
            Some(event) => {
                tracing::info!("Deleted event {}", id);
                self.details_event_id = None;
                if self.selected_event_index > 0 {
                    self.selected_event_index -= 1;
                }
                let title = event.title.clone();
                self.notify(ToastKind::Info, "Event deleted", Some(title));
            }
            None => {
                tracing::warn!("Delete requested for missing event {}", id);
                self.details_event_id = None;
            }
        }
        removed
    }

    /// Applies and persists a theme by key. Unknown keys change nothing.
    pub fn set_theme(&mut self, key: &str) -> bool {
        let Some(theme) = Theme::from_key(key) else {
            self.notify(ToastKind::Error, format!("Unknown theme: {}", key), Some(theme_list()));
            return false;
        };
        self.apply_theme(theme);
        true
    }

    pub fn cycle_theme(&mut self) {
        let theme = self.theme.next();
        self.apply_theme(theme);
    }

    fn apply_theme(&mut self, theme: Theme) {
        if let Err(e) = preferences::save_theme(&mut *self.preferences, &theme) {
            tracing::error!("Failed to save theme preference: {}", e);
        }
        let name = theme.name;
        self.theme = theme;
        self.notify(ToastKind::Info, format!("Theme: {}", name), None);
    }

    pub fn saved_theme_key(&self) -> Option<String> {
        self.preferences.get(preferences::THEME_KEY).ok().flatten()
    }

    pub fn set_category_filter(&mut self, selection: Selection) {
        self.filter.category = selection;
        self.reset_event_selection();
    }

    pub fn set_priority_filter(&mut self, selection: Selection) {
        self.filter.priority = selection;
        self.reset_event_selection();
    }

    pub fn cycle_category_filter(&mut self) {
        let next = self.filter.category.cycle(&self.categories);
        self.set_category_filter(next);
    }

    pub fn cycle_priority_filter(&mut self) {
        let next = self.filter.priority.cycle(&self.priorities);
        self.set_priority_filter(next);
    }

    pub fn clear_filters(&mut self) {
        self.filter = EventFilter::default();
        self.reset_event_selection();
    }

    /// Starts an animated month change. Requests made while a transition is
    /// running are dropped.
    pub fn request_month(&mut self, step: MonthStep) -> bool {
        if self.month_transition.is_some() {
            return false;
        }
        let now = Instant::now();
        self.month_transition = Some(step);
        self.timers.schedule(now, self.ui_config.month_shift_delay(), Deferred::ShiftMonth(step));
        self.timers.schedule(now, self.ui_config.month_transition(), Deferred::EndMonthTransition);
        true
    }

    /// Moves by one month keeping the day, clamped to the month's length.
    pub fn shift_month(&mut self, step: MonthStep) {
        let shifted = match step {
            MonthStep::Previous => self.selected_date.checked_sub_months(Months::new(1)),
            MonthStep::Next => self.selected_date.checked_add_months(Months::new(1)),
        };
        if let Some(date) = shifted {
            self.select_date(date);
        }
    }

    pub fn submit_contact_form(&mut self) -> bool {
        let Some(message) = self.contact_form.begin_submit() else {
            return false;
        };
        tracing::info!("Sending contact message from {} <{}>", message.name, message.email);
        let after = self.ui_config.contact_submit_delay();
        self.timers.schedule(Instant::now(), after, Deferred::CompleteContactSubmission);
        true
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    /// Runs every deferred action that is due.
    pub fn tick(&mut self) {
        for action in self.timers.take_due(Instant::now()) {
            match action {
                Deferred::DismissToast(id) => {
                    self.toasts.dismiss(id);
                }
                Deferred::ShiftMonth(step) => self.shift_month(step),
                Deferred::EndMonthTransition => self.month_transition = None,
                Deferred::CompleteContactSubmission => {
                    self.contact_form.finish_submit();
                    self.notify(
                        ToastKind::Success,
                        "Message sent!",
                        Some("Thank you for your message. We'll get back to you soon.".to_string()),
                    );
                }
            }
        }
    }
}

fn theme_list() -> String {
    format!("Available: {}", Theme::KEYS.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::{EventColor, ReferenceItem};
    use crate::form::{FormField, ValidationError};
    use chrono::NaiveTime;
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn create_event_at(id: EventId, date: NaiveDate, hour: u32, category: &str) -> Event {
        Event {
            id,
            title: format!("Event {}", id),
            date,
            time: NaiveTime::from_hms_opt(hour, 0, 0).unwrap(),
            duration_minutes: 60,
            description: String::new(),
            color: EventColor::Blue,
            category: category.to_string(),
            priority: "medium".to_string(),
            location: String::new(),
            attendees: vec![],
        }
    }

    fn dataset(events: Vec<Event>) -> Dataset {
        Dataset {
            events,
            categories: ReferenceList::new(vec![
                ReferenceItem { id: "work".into(), name: "Work".into(), color: EventColor::Blue },
                ReferenceItem { id: "personal".into(), name: "Personal".into(), color: EventColor::Purple },
            ]),
            priorities: ReferenceList::new(vec![
                ReferenceItem { id: "medium".into(), name: "Medium".into(), color: EventColor::Orange },
            ]),
        }
    }

    fn app_on(today: NaiveDate, events: Vec<Event>) -> AppState {
        AppState::new(dataset(events), today)
    }

    #[test]
    fn new_app_starts_in_normal_mode_on_calendar() {
        let app = app_on(date(2025, 1, 15), vec![]);
        assert_eq!(app.mode, Mode::Normal);
        assert_eq!(app.section, Section::Calendar);
        assert_eq!(app.selected_date, date(2025, 1, 15));
    }

    #[test]
    fn events_for_date_are_sorted_by_time() {
        let day = date(2025, 1, 15);
        let app = app_on(day, vec![
            create_event_at(1, day, 14, "work"),
            create_event_at(2, day, 9, "work"),
            create_event_at(3, date(2025, 1, 16), 10, "work"),
        ]);

        let ids: Vec<EventId> = app.get_events_for_date(day).iter().map(|e| e.id).collect();

        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn filters_narrow_the_day_list() {
        let day = date(2025, 1, 15);
        let mut app = app_on(day, vec![
            create_event_at(1, day, 9, "work"),
            create_event_at(2, day, 10, "personal"),
        ]);

        app.cycle_category_filter();

        assert_eq!(app.filter.category, Selection::Only("work".into()));
        assert_eq!(app.get_events_for_date(day).len(), 1);

        app.clear_filters();
        assert_eq!(app.get_events_for_date(day).len(), 2);
    }

    #[test]
    fn submitting_standup_adds_it_to_june_third() {
        let mut app = app_on(date(2024, 6, 1), vec![]);
        app.open_event_form("Standup".to_string());
        {
            let form = app.event_form.as_mut().unwrap();
            form.date = "2024-06-03".to_string();
            form.time = "09:00".to_string();
            form.duration = "15".to_string();
        }

        let id = app.submit_event_form().unwrap();

        assert_eq!(app.store.len(), 1);
        assert_eq!(app.mode, Mode::Normal);
        assert!(app.event_form.is_none());
        let grid = month_view::calculate_layout(&app);
        let cell = grid.cell(date(2024, 6, 3)).unwrap();
        assert_eq!(cell.events.iter().map(|e| e.id).collect::<Vec<_>>(), vec![id]);
        assert_eq!(app.toasts.iter().last().map(|t| t.title.as_str()), Some("Event created"));
    }

    #[test]
    fn empty_title_keeps_form_open_and_store_unchanged() {
        let mut app = app_on(date(2024, 6, 1), vec![]);
        app.open_event_form(String::new());
        app.event_form.as_mut().unwrap().time = "09:00".to_string();

        assert!(app.submit_event_form().is_none());

        assert!(app.store.is_empty());
        assert_eq!(app.mode, Mode::Insert);
        let form = app.event_form.as_ref().unwrap();
        assert_eq!(form.error_for(FormField::Title), Some(&ValidationError::TitleRequired));
    }

    #[test]
    fn exhausted_ids_keep_form_open_with_error_toast() {
        let day = date(2024, 6, 1);
        let mut app = app_on(day, vec![create_event_at(EventId::MAX, day, 9, "work")]);
        app.open_event_form("Standup".to_string());
        app.event_form.as_mut().unwrap().time = "09:00".to_string();

        assert!(app.submit_event_form().is_none());

        assert_eq!(app.store.len(), 1);
        assert_eq!(app.mode, Mode::Insert);
        assert!(app.event_form.is_some());
        assert_eq!(app.toasts.iter().last().map(|t| t.kind), Some(ToastKind::Error));
    }

    #[test]
    fn delete_requires_confirmation_and_closes_details() {
        let day = date(2025, 1, 15);
        let mut app = app_on(day, vec![
            create_event_at(1, day, 9, "work"),
            create_event_at(2, day, 10, "work"),
        ]);
        app.open_details();
        assert_eq!(app.details_event_id, Some(1));

        app.request_delete();
        assert_eq!(app.mode, Mode::Confirm);
        assert_eq!(app.store.len(), 2);

        let removed = app.confirm_delete().unwrap();

        assert_eq!(removed.id, 1);
        assert_eq!(app.store.iter().map(|e| e.id).collect::<Vec<_>>(), vec![2]);
        assert!(app.details_event_id.is_none());
        assert_eq!(app.mode, Mode::Normal);
    }

    #[test]
    fn cancelled_delete_keeps_event_and_details() {
        let day = date(2025, 1, 15);
        let mut app = app_on(day, vec![create_event_at(1, day, 9, "work")]);
        app.open_details();
        app.request_delete();

        app.cancel_delete();

        assert_eq!(app.store.len(), 1);
        assert_eq!(app.details_event_id, Some(1));
    }

    #[test]
    fn theme_change_is_persisted() {
        let mut app = app_on(date(2025, 1, 15), vec![]);

        assert!(app.set_theme("forest"));

        assert_eq!(app.theme.key, "forest");
        assert_eq!(app.saved_theme_key().as_deref(), Some("forest"));
    }

    #[test]
    fn unknown_theme_is_ignored() {
        let mut app = app_on(date(2025, 1, 15), vec![]);

        assert!(!app.set_theme("neon"));

        assert_eq!(app.theme.key, "default");
        assert_eq!(app.saved_theme_key(), None);
    }

    #[test]
    fn saved_theme_is_applied_on_startup() {
        let mut store = MemoryStore::default();
        store.set(preferences::THEME_KEY, "purple").unwrap();

        let app = app_on(date(2025, 1, 15), vec![]).with_preferences(Box::new(store));

        assert_eq!(app.theme.key, "purple");
    }

    #[test]
    fn month_shift_clamps_day() {
        let mut app = app_on(date(2025, 1, 31), vec![]);

        app.shift_month(MonthStep::Next);
        assert_eq!(app.selected_date, date(2025, 2, 28));

        app.shift_month(MonthStep::Previous);
        assert_eq!(app.selected_date, date(2025, 1, 28));
    }

    #[tokio::test(start_paused = true)]
    async fn month_changes_after_delay_and_ignores_repeats() {
        let mut app = app_on(date(2025, 1, 15), vec![]);

        assert!(app.request_month(MonthStep::Next));
        assert!(!app.request_month(MonthStep::Next));

        tokio::time::advance(Duration::from_millis(299)).await;
        app.tick();
        assert_eq!(app.selected_date.month(), 1);

        tokio::time::advance(Duration::from_millis(1)).await;
        app.tick();
        assert_eq!(app.selected_date, date(2025, 2, 15));
        assert!(app.month_transition.is_some());

        tokio::time::advance(Duration::from_millis(300)).await;
        app.tick();
        assert!(app.month_transition.is_none());
        assert!(app.request_month(MonthStep::Previous));
    }

    #[tokio::test(start_paused = true)]
    async fn toast_disappears_after_its_delay() {
        let mut app = app_on(date(2025, 1, 15), vec![]);
        app.notify(ToastKind::Info, "Hello", None);

        tokio::time::advance(Duration::from_millis(4999)).await;
        app.tick();
        assert_eq!(app.toasts.len(), 1);

        tokio::time::advance(Duration::from_millis(1)).await;
        app.tick();
        assert!(app.toasts.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn contact_submission_completes_after_delay() {
        let mut app = app_on(date(2025, 1, 15), vec![]);
        app.contact_form.name = "Ada".to_string();
        app.contact_form.email = "ada@example.com".to_string();
        app.contact_form.subject = "Hi".to_string();
        app.contact_form.message = "Hello there".to_string();

        assert!(app.submit_contact_form());
        assert!(app.contact_form.submitting);
        assert!(app.toasts.is_empty());

        tokio::time::advance(Duration::from_secs(1)).await;
        app.tick();

        assert!(!app.contact_form.submitting);
        assert!(app.contact_form.name.is_empty());
        assert_eq!(app.toasts.iter().next().map(|t| t.title.as_str()), Some("Message sent!"));
    }

    #[test]
    fn invalid_contact_email_shows_no_toast() {
        let mut app = app_on(date(2025, 1, 15), vec![]);
        app.contact_form.name = "Ada".to_string();
        app.contact_form.email = "not-an-email".to_string();
        app.contact_form.subject = "Hi".to_string();
        app.contact_form.message = "Hello".to_string();

        assert!(!app.submit_contact_form());
        assert!(app.toasts.is_empty());
        assert!(app.timers.is_empty());
    }

    #[test]
    fn stats_ignore_filters() {
        let day = date(2025, 1, 15);
        let mut app = app_on(day, vec![
            create_event_at(1, day, 9, "work"),
            create_event_at(2, date(2025, 1, 20), 10, "personal"),
            create_event_at(3, date(2025, 2, 1), 10, "personal"),
        ]);
        app.set_category_filter(Selection::Only("work".into()));

        let stats = app.stats();

        assert_eq!(stats, MonthStats { total: 3, this_month: 2, today: 1 });
    }
}
