use iced::{
    Alignment::Center,
    Element, Length, Task,
    widget::{button, column, container, row, text, text_input},
};
use tracing::{debug, warn};

use crate::{
    core::{
        contact::{ContactForm, Field, Notification, Receipt, SUBMIT_DELAY, deliver},
        content::{CONTACT_CHANNELS, CONTACT_INTRO, ContactChannel},
        cursor::ElementRole,
        reveal::SectionId,
    },
    error::{FolioError, SubmissionError},
    gui::{
        AppState,
        sections::{PageEvent, Section, SectionMessage},
        widgets::{accent, body, card, heading, hoverable, reveal, social_links},
    },
};

#[derive(Debug, Clone, Default)]
pub struct Contact {
    form: ContactForm,
}

#[derive(Debug, Clone)]
pub enum ContactMessage {
    FieldChanged(Field, String),
    Submit,
    Delivered(Result<Receipt, SubmissionError>),
}

impl Section for Contact {
    type Message = ContactMessage;

    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, SectionMessage<ContactMessage>> {
        let p = |index| state.reveal.child_progress(SectionId::Contact, index, state.now);

        let intro = column![
            heading("Get In Touch", p(0)),
            body(CONTACT_INTRO, p(0)).center().width(Length::Fill),
        ]
        .spacing(24);

        let channels = column(CONTACT_CHANNELS.into_iter().map(channel))
            .push(text("Follow Me").size(18))
            .push(social_links())
            .spacing(20);

        let submitting = self.form.is_submitting();
        let submit = hoverable(
            button(text(if submitting { "Sending..." } else { "Send Message" }))
                .padding([12, 24])
                .width(Length::Fill)
                .style(button::primary)
                .on_press_maybe(
                    (!submitting).then_some(SectionMessage::Local(ContactMessage::Submit)),
                ),
            ElementRole::Button,
        );

        let fields: Element<'a, _> = if state.is_compact() {
            column![self.input(Field::Name), self.input(Field::Email)]
                .spacing(16)
                .into()
        } else {
            row![self.input(Field::Name), self.input(Field::Email)]
                .spacing(16)
                .into()
        };
        let form: Element<'a, _> = card(
            column![
                text("Send Me a Message").size(22),
                fields,
                self.input(Field::Subject),
                self.input(Field::Message),
                submit,
            ]
            .spacing(16),
        );

        let details = card(column![text("Contact Information").size(22), channels].spacing(24));
        let panels: Element<'a, _> = if state.is_compact() {
            column![reveal(details, p(1)), reveal(form, p(2))]
                .spacing(32)
                .into()
        } else {
            row![
                container(reveal(details, p(1))).width(Length::FillPortion(2)),
                container(reveal(form, p(2))).width(Length::FillPortion(3)),
            ]
            .spacing(32)
            .into()
        };

        column![reveal(intro, p(0)), panels]
            .spacing(48)
            .padding([96, 48])
            .align_x(Center)
            .into()
    }

    fn update(
        &mut self,
        message: ContactMessage,
        _state: &mut AppState,
    ) -> Task<SectionMessage<ContactMessage>> {
        match message {
            ContactMessage::FieldChanged(field, value) => {
                self.form.set_field(field, value);
                Task::none()
            }
            ContactMessage::Submit => match self.form.begin_submit() {
                Ok(submission) => Task::perform(deliver(submission, SUBMIT_DELAY), |result| {
                    SectionMessage::Local(ContactMessage::Delivered(result))
                }),
                Err(FolioError::Validation(error)) => {
                    debug!(%error, "contact form incomplete");
                    notify(Notification::from(&error))
                }
                Err(FolioError::Submission(SubmissionError::AlreadySubmitting)) => Task::none(),
                Err(error) => {
                    warn!(%error, "contact form rejected");
                    notify(Notification::error("Message not sent", error.to_string()))
                }
            },
            ContactMessage::Delivered(result) => notify(self.form.finish(&result)),
        }
    }
}

impl Contact {
    fn input<'a>(&'a self, field: Field) -> Element<'a, SectionMessage<ContactMessage>> {
        let mut input = text_input(field.label(), self.form.value(field)).padding(12);
        if !self.form.is_submitting() {
            input = input.on_input(move |value| {
                SectionMessage::Local(ContactMessage::FieldChanged(field, value))
            });
        }
        hoverable(input, ElementRole::Input)
    }
}

fn channel<'a>(channel: ContactChannel) -> Element<'a, SectionMessage<ContactMessage>> {
    hoverable(
        button(
            column![accent(channel.title, 1.0).size(14), text(channel.value)].spacing(4),
        )
        .style(button::text)
        .on_press(PageEvent::OpenLink(channel.link).into()),
        ElementRole::Link,
    )
}

fn notify(notification: Notification) -> Task<SectionMessage<ContactMessage>> {
    Task::done(PageEvent::Notify(notification).into())
}
