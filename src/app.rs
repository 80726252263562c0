//! Main application state and event loop.
//!
//! This module implements The Elm Architecture (TEA) pattern: all state lives
//! in [`App`], every change flows through [`App::update`], and
//! [`App::view`] draws the current state. Views never mutate the app
//! directly. They return actions which are applied here.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Margin, Rect},
    style::{Modifier, Style},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use tracing::{debug, info, trace, warn};

use crate::config::Settings;
use crate::data::{next_appointment_id, Appointment, Doctor, MockData, Screen};
use crate::error::AppError;
use crate::events::{Event, KeyContext};
use crate::ui::theme::theme;
use crate::ui::{
    render_footer, AppointmentsAction, AppointmentsView, DashboardAction, DashboardView,
    HelpAction, HelpView, HistoryAction, LoginAction, LoginView, MedicalHistoryView,
    RegisterAction, RegisterView, RemindersAction, RemindersView, ScheduleAction, ScheduleView,
    SearchAction, SearchDoctorsView, Toasts,
};

/// Width of the application column. Wider terminals get side margins.
const APP_WIDTH: u16 = 52;

/// The main application struct that holds all state.
pub struct App {
    /// The screen being displayed.
    screen: Screen,
    /// Doctor chosen on the search screen, shown on the schedule screen.
    selected_doctor: Option<Doctor>,
    /// Doctors, upcoming appointments and history for this session.
    data: MockData,
    /// Settings the session started with.
    settings: Settings,
    should_quit: bool,
    show_help: bool,
    toasts: Toasts,
    login_view: LoginView,
    register_view: RegisterView,
    dashboard_view: DashboardView,
    search_view: SearchDoctorsView,
    schedule_view: ScheduleView,
    appointments_view: AppointmentsView,
    history_view: MedicalHistoryView,
    reminders_view: RemindersView,
    help_view: HelpView,
}

impl App {
    /// Create the application on the screen named in `settings`.
    ///
    /// An unknown start screen falls back to the login screen.
    pub fn new(settings: Settings) -> Self {
        let screen = Screen::parse_or_login(&settings.start_screen);
        Self::with_screen(settings, screen)
    }

    /// Create the application on a specific screen.
    pub fn with_screen(settings: Settings, screen: Screen) -> Self {
        debug!(screen = %screen, "Creating new application instance");
        let reminders_view =
            RemindersView::new(settings.notifications_enabled, settings.reminder_lead);

        Self {
            screen,
            selected_doctor: None,
            data: MockData::seed(),
            settings,
            should_quit: false,
            show_help: false,
            toasts: Toasts::new(),
            login_view: LoginView::new(),
            register_view: RegisterView::new(),
            dashboard_view: DashboardView::new(),
            search_view: SearchDoctorsView::new(),
            schedule_view: ScheduleView::new(),
            appointments_view: AppointmentsView::new(),
            history_view: MedicalHistoryView::new(),
            reminders_view,
            help_view: HelpView::new(),
        }
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    // -------------------------------------------------------------------------
    // Navigation
    // -------------------------------------------------------------------------

    /// Switch to `screen`. Any screen may follow any other.
    ///
    /// Forms, the search query and the date picker start fresh each time
    /// their screen is entered.
    pub fn navigate_to(&mut self, screen: Screen) {
        debug!(from = %self.screen, to = %screen, "Navigating");
        match screen {
            Screen::Login => self.login_view.reset(),
            Screen::Register => self.register_view.reset(),
            Screen::Dashboard => self.dashboard_view.reset(),
            Screen::SearchDoctors => self.search_view.reset(),
            Screen::ScheduleAppointment => self.schedule_view.reset(),
            Screen::Appointments => self
                .appointments_view
                .clamp_selection(self.data.appointments.len()),
            Screen::MedicalHistory => self.history_view.reset(),
            Screen::Reminders => {}
        }
        self.screen = screen;
    }

    /// Remember `doctor` and open the schedule screen for it.
    pub fn select_doctor_and_schedule(&mut self, doctor: Doctor) {
        info!(doctor = %doctor.name, "Doctor selected for scheduling");
        self.selected_doctor = Some(doctor);
        self.navigate_to(Screen::ScheduleAppointment);
    }

    /// Remove the upcoming appointment with `id`.
    ///
    /// Returns whether an appointment was removed. Unknown ids are ignored.
    pub fn cancel_appointment(&mut self, id: u32) -> bool {
        let Some(index) = self.data.appointments.iter().position(|a| a.id == id) else {
            debug!(id, "No appointment to cancel");
            return false;
        };

        let removed = self.data.appointments.remove(index);
        info!(id, doctor = %removed.doctor_name, "Appointment cancelled");
        self.appointments_view
            .clamp_selection(self.data.appointments.len());
        true
    }

    /// Book `date` and `time` with the selected doctor, then show the
    /// appointment list.
    ///
    /// Returns the id of the new appointment. Without a selected doctor
    /// nothing is booked.
    pub fn confirm_appointment(&mut self, date: &str, time: &str) -> Option<u32> {
        let booked = match &self.selected_doctor {
            Some(doctor) => {
                let id = next_appointment_id(
                    self.data.appointments.iter().chain(self.data.history.iter()),
                );
                self.data
                    .appointments
                    .push(Appointment::upcoming(id, doctor.name.clone(), date, time));
                info!(id, doctor = %doctor.name, date, time, "Appointment booked");
                self.toasts
                    .success(format!("Booked {} on {} at {}", doctor.name, date, time));
                Some(id)
            }
            None => {
                warn!(date, time, "Confirmed a schedule without a selected doctor");
                None
            }
        };
        self.navigate_to(Screen::Appointments);
        booked
    }

    /// End the session and return to a freshly seeded login screen.
    pub fn logout(&mut self) {
        info!("Logging out");
        *self = Self::with_screen(self.settings.clone(), Screen::Login);
    }

    /// Report an error to the user.
    ///
    /// Critical errors are logged as warnings and shown as error toasts.
    /// Recoverable errors become warning toasts.
    pub fn handle_error(&mut self, error: &AppError) {
        if error.is_critical() {
            warn!(error = %error, "Critical error occurred");
            self.toasts.error(error.user_message());
        } else {
            debug!(error = %error, "Recoverable error occurred");
            self.toasts.warning(error.user_message());
        }
    }

    // -------------------------------------------------------------------------
    // Update
    // -------------------------------------------------------------------------

    /// Update the application state based on an event.
    pub fn update(&mut self, event: Event) {
        match event {
            Event::Key(key_event) => {
                trace!(key = ?key_event.code, modifiers = ?key_event.modifiers, "Key event");
                self.handle_key_event(key_event);
            }
            Event::Resize(width, height) => {
                // ratatui redraws at the new size on the next frame
                trace!(width, height, "Terminal resize event");
            }
            Event::Tick => self.toasts.tick(),
        }
    }

    /// Whether keystrokes on the current screen go into a text field.
    fn is_input_focused(&self) -> bool {
        match self.screen {
            Screen::Login => self.login_view.is_input_focused(),
            Screen::Register => self.register_view.is_input_focused(),
            Screen::SearchDoctors => true,
            _ => false,
        }
    }

    fn handle_key_event(&mut self, key_event: KeyEvent) {
        if key_event.code == KeyCode::Char('c') && key_event.modifiers == KeyModifiers::CONTROL {
            self.should_quit = true;
            return;
        }

        if self.show_help {
            if let Some(HelpAction::Close) = self.help_view.handle_input(key_event) {
                self.show_help = false;
            }
            return;
        }

        // Some terminals report '?' with SHIFT, so only CONTROL is excluded
        if !self.is_input_focused() && !key_event.modifiers.contains(KeyModifiers::CONTROL) {
            match key_event.code {
                KeyCode::Char('?') => {
                    self.help_view.open(KeyContext::for_screen(self.screen));
                    self.show_help = true;
                    return;
                }
                KeyCode::Char('q') if matches!(self.screen, Screen::Login | Screen::Dashboard) => {
                    self.should_quit = true;
                    return;
                }
                _ => {}
            }
        }

        self.dispatch_to_view(key_event);
    }

    /// Send a key to the active view and apply the action it returns.
    fn dispatch_to_view(&mut self, key_event: KeyEvent) {
        match self.screen {
            Screen::Login => match self.login_view.handle_input(key_event) {
                Some(LoginAction::Login) => self.navigate_to(Screen::Dashboard),
                Some(LoginAction::Register) => self.navigate_to(Screen::Register),
                None => {}
            },
            Screen::Register => match self.register_view.handle_input(key_event) {
                Some(RegisterAction::Back) => self.navigate_to(Screen::Login),
                Some(RegisterAction::Complete) => {
                    self.toasts.info("Registration sent. Please log in.");
                    self.navigate_to(Screen::Login);
                }
                None => {}
            },
            Screen::Dashboard => match self.dashboard_view.handle_input(key_event) {
                Some(DashboardAction::Navigate(screen)) => self.navigate_to(screen),
                Some(DashboardAction::Logout) => self.logout(),
                None => {}
            },
            Screen::SearchDoctors => {
                match self.search_view.handle_input(key_event, &self.data.doctors) {
                    Some(SearchAction::Back) => self.navigate_to(Screen::Dashboard),
                    Some(SearchAction::Book(doctor)) => self.select_doctor_and_schedule(doctor),
                    None => {}
                }
            }
            Screen::ScheduleAppointment => match self.schedule_view.handle_input(key_event) {
                Some(ScheduleAction::Back) => self.navigate_to(Screen::SearchDoctors),
                Some(ScheduleAction::Confirm { date, time }) => {
                    self.confirm_appointment(&date, &time);
                }
                None => {}
            },
            Screen::Appointments => {
                match self
                    .appointments_view
                    .handle_input(key_event, &self.data.appointments)
                {
                    Some(AppointmentsAction::Back) => self.navigate_to(Screen::Dashboard),
                    Some(AppointmentsAction::Cancel(id)) => {
                        if self.cancel_appointment(id) {
                            self.toasts.success("Appointment cancelled");
                        }
                    }
                    None => {}
                }
            }
            Screen::MedicalHistory => {
                if let Some(HistoryAction::Back) = self.history_view.handle_input(key_event) {
                    self.navigate_to(Screen::Dashboard);
                }
            }
            Screen::Reminders => {
                if let Some(RemindersAction::Back) = self.reminders_view.handle_input(key_event) {
                    self.navigate_to(Screen::Dashboard);
                }
            }
        }
    }

    // -------------------------------------------------------------------------
    // View
    // -------------------------------------------------------------------------

    /// Render the application UI.
    pub fn view(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let [body, footer] = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(area);
        let [column] = Layout::horizontal([Constraint::Max(APP_WIDTH)])
            .flex(Flex::Center)
            .areas(body);

        let frame_block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme().dim));
        let inner = frame_block.inner(column);
        frame.render_widget(frame_block, column);

        let [header, content] =
            Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(inner);
        self.render_header(frame, header);
        self.render_content(frame, content.inner(Margin::new(1, 0)));

        let context = if self.show_help {
            KeyContext::Help
        } else {
            KeyContext::for_screen(self.screen)
        };
        render_footer(frame, footer, self.screen, context);

        self.toasts.render(frame, area);

        if self.show_help {
            self.help_view.render(frame, area);
        }
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let t = theme();
        let title = Paragraph::new("MEDICITAS")
            .style(Style::default().fg(t.accent).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::BOTTOM)
                    .border_style(Style::default().fg(t.dim)),
            );
        frame.render_widget(title, area);
    }

    /// Draw the active screen. Every screen has exactly one view.
    fn render_content(&mut self, frame: &mut Frame, area: Rect) {
        match self.screen {
            Screen::Login => self.login_view.render(frame, area),
            Screen::Register => self.register_view.render(frame, area),
            Screen::Dashboard => {
                self.dashboard_view
                    .render(frame, area, self.settings.greeting_name())
            }
            Screen::SearchDoctors => self.search_view.render(frame, area, &self.data.doctors),
            Screen::ScheduleAppointment => {
                self.schedule_view
                    .render(frame, area, self.selected_doctor.as_ref())
            }
            Screen::Appointments => {
                self.appointments_view
                    .render(frame, area, &self.data.appointments)
            }
            Screen::MedicalHistory => self.history_view.render(frame, area, &self.data.history),
            Screen::Reminders => {
                let next = self.data.appointments.iter().find(|a| a.is_upcoming());
                self.reminders_view.render(frame, area, next);
            }
        }
    }
}

#[cfg(test)]
impl App {
    pub fn selected_doctor(&self) -> Option<&Doctor> {
        self.selected_doctor.as_ref()
    }

    pub fn doctors(&self) -> &[Doctor] {
        &self.data.doctors
    }

    pub fn appointments(&self) -> &[Appointment] {
        &self.data.appointments
    }

    pub fn history(&self) -> &[Appointment] {
        &self.data.history
    }

    pub fn is_help_visible(&self) -> bool {
        self.show_help
    }

    pub fn toasts(&self) -> &Toasts {
        &self.toasts
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}
