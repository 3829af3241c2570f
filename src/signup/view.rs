use iced::widget::{button, text, Column, Container, Space};
use iced::{Alignment, Element, Length};

use super::validation::Field;
use super::{Message, SignupPanel, Step};
use crate::ui::{color, component::form};

impl SignupPanel {
    pub fn view(&self) -> Element<Message> {
        let content = match &self.step {
            Step::Submitted { message } => self.success_view(message),
            _ => self.form_view(),
        };
        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .padding(40)
            .into()
    }

    fn form_view(&self) -> Column<'_, Message> {
        let username = form::Form::new("Username", &self.username, Message::UsernameChanged)
            .on_submit(Message::FieldUnfocused(Field::Username))
            .size(16)
            .padding(15);

        let email = form::Form::new("Email", &self.email, Message::EmailChanged)
            .on_submit(Message::FieldUnfocused(Field::Email))
            .size(16)
            .padding(15);

        let password = form::Form::new("Password", &self.password, Message::PasswordChanged)
            .on_submit(Message::FieldUnfocused(Field::Password))
            .size(16)
            .padding(15)
            .secure();

        let verify_password = form::Form::new(
            "Verify password",
            &self.verify_password,
            Message::VerifyPasswordChanged,
        )
        .on_submit(Message::FieldUnfocused(Field::VerifyPassword))
        .size(16)
        .padding(15)
        .secure();

        let submit = if self.step == Step::Submitting {
            button(text("Creating account..."))
                .width(Length::Fill)
                .padding(12)
        } else {
            button(text("Create account"))
                .on_press(Message::Submit)
                .width(Length::Fill)
                .padding(12)
        };

        Column::new()
            .push(text("Create your account").size(24))
            .push(Space::with_height(Length::Fixed(20.0)))
            .push(username)
            .push(email)
            .push(password)
            .push(verify_password)
            .push_maybe(
                self.post_error
                    .as_ref()
                    .map(|err| text(err.as_str()).size(14).color(color::RED)),
            )
            .push(Space::with_height(Length::Fixed(10.0)))
            .push(submit)
            .spacing(10)
            .max_width(460)
            .align_x(Alignment::Center)
    }

    fn success_view<'a>(&'a self, message: &'a str) -> Column<'a, Message> {
        Column::new()
            .push(text("Account created").size(24).color(color::GREEN))
            .push(Space::with_height(Length::Fixed(10.0)))
            .push(text(message).size(16).color(color::GREY_2))
            .push(Space::with_height(Length::Fixed(20.0)))
            .push(
                button(text("Start over"))
                    .on_press(Message::Reset)
                    .padding(12),
            )
            .spacing(10)
            .max_width(460)
            .align_x(Alignment::Center)
    }
}
