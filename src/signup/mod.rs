pub mod validation;
pub mod view;

use std::sync::Arc;

use iced::widget::{focus_next, focus_previous};
use iced::{event, keyboard, Event, Subscription, Task};

use crate::services::accounts::{AccountsClient, SignupError, SignupRequest, SignupResponse};
use crate::ui::component::form;
use validation::Field;

const REJECTION_FALLBACK: &str = "Signup failed, please try again.";

/// Progress of the signup submission.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    Editing,
    Submitting,
    /// Terminal until the user starts over.
    Submitted { message: String },
}

#[derive(Debug, Clone)]
pub enum Message {
    UsernameChanged(String),
    EmailChanged(String),
    PasswordChanged(String),
    VerifyPasswordChanged(String),
    FieldUnfocused(Field),
    Submit,
    Submitted(Result<SignupResponse, SignupError>),
    Reset,
    TabPressed(bool),
    CtrlC,
}

pub struct SignupPanel {
    client: Arc<AccountsClient>,

    pub username: form::Value<String>,
    pub email: form::Value<String>,
    pub password: form::Value<String>,
    pub verify_password: form::Value<String>,

    pub post_error: Option<String>,
    pub step: Step,
}

async fn ctrl_c() -> Result<(), ()> {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("{}", e);
    };
    log::info!("Signal received, exiting");
    Ok(())
}

impl SignupPanel {
    pub fn new() -> (Self, Task<Message>) {
        (
            Self {
                client: Arc::new(AccountsClient::new()),
                username: form::Value::default(),
                email: form::Value::default(),
                password: form::Value::default(),
                verify_password: form::Value::default(),
                post_error: None,
                step: Step::Editing,
            },
            Task::perform(ctrl_c(), |_| Message::CtrlC),
        )
    }

    pub fn title(&self) -> String {
        format!("Signup v{}", crate::VERSION)
    }

    pub fn theme(&self) -> iced::Theme {
        iced::Theme::Dark
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            // Editing a value never touches its warning, the rules only run
            // again on the next blur.
            Message::UsernameChanged(v) => self.username.value = v,
            Message::EmailChanged(v) => self.email.value = v,
            Message::PasswordChanged(v) => self.password.value = v,
            Message::VerifyPasswordChanged(v) => self.verify_password.value = v,
            Message::FieldUnfocused(field) => self.on_field_blur(field),
            Message::Submit => {
                if self.step != Step::Editing {
                    log::warn!("Ignoring submit, a submission is already in progress");
                    return Task::none();
                }
                // Outstanding field warnings do not block submission, the
                // endpoint has the final say on the data.
                self.step = Step::Submitting;
                let client = self.client.clone();
                let request = SignupRequest {
                    username: self.username.value.clone(),
                    email: self.email.value.clone(),
                    password: self.password.value.clone(),
                };
                return Task::perform(
                    async move { client.sign_up(&request).await },
                    Message::Submitted,
                );
            }
            Message::Submitted(result) => {
                if self.step != Step::Submitting {
                    log::warn!("Ignoring a stale submission result");
                    return Task::none();
                }
                match result {
                    Ok(response) => {
                        log::info!("Account created for '{}'", self.username.value);
                        self.step = Step::Submitted {
                            message: response.message,
                        };
                    }
                    Err(SignupError::Rejected(info)) => {
                        log::info!("Signup rejected by the endpoint (HTTP {})", info.status_code);
                        self.post_error =
                            Some(info.message().unwrap_or_else(|| REJECTION_FALLBACK.to_string()));
                        self.step = Step::Editing;
                    }
                    // A transport or decoding failure is not surfaced as a
                    // banner, the form stays editable and the user may retry.
                    Err(SignupError::Transport(err)) => {
                        log::warn!("Signup request failed: {}", err);
                        self.step = Step::Editing;
                    }
                }
            }
            Message::Reset => self.reset(),
            Message::TabPressed(shift) => {
                return if shift { focus_previous() } else { focus_next() };
            }
            Message::CtrlC => {
                return iced::window::get_latest().and_then(iced::window::close);
            }
        }
        Task::none()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        iced::event::listen_with(|event, status, _| match (&event, status) {
            (
                Event::Keyboard(keyboard::Event::KeyPressed {
                    key: keyboard::Key::Named(keyboard::key::Named::Tab),
                    modifiers,
                    ..
                }),
                event::Status::Ignored,
            ) => Some(Message::TabPressed(modifiers.shift())),
            _ => None,
        })
    }

    /// Run the rules matching the field that lost focus.
    fn on_field_blur(&mut self, field: Field) {
        match field {
            Field::Username => {
                let warning = validation::validate_username(&self.username.value);
                set_warning(&mut self.username, warning);
            }
            Field::Email => {
                let warning = validation::validate_email(&self.email.value);
                set_warning(&mut self.email, warning);
            }
            // Both password rules run together whenever either password
            // field loses focus.
            Field::Password | Field::VerifyPassword => {
                let password_warning = validation::validate_password(&self.password.value);
                let verify_warning = validation::validate_verify_password(
                    &self.password.value,
                    &self.verify_password.value,
                );
                set_warning(&mut self.password, password_warning);
                set_warning(&mut self.verify_password, verify_warning);
            }
        }
    }

    fn reset(&mut self) {
        self.username = form::Value::default();
        self.email = form::Value::default();
        self.password = form::Value::default();
        self.verify_password = form::Value::default();
        self.post_error = None;
        self.step = Step::Editing;
    }
}

fn set_warning(value: &mut form::Value<String>, warning: Option<&'static str>) {
    value.warning = warning;
    value.valid = warning.is_none();
}
