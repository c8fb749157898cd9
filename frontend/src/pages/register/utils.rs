use leptos::*;
use std::{cell::Cell, rc::Rc};

pub const SEND_OTP_FAILED: &str = "Failed to send OTP. Please try again.";
pub const VERIFY_OTP_FAILED: &str = "OTP verification failed. Please try again.";
pub const REGISTRATION_FAILED: &str = "Registration failed. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Password,
    ConfirmPassword,
    OtpCode,
}

impl FormField {
    /// DOM id of the bound input.
    pub fn id(self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Password => "password",
            FormField::ConfirmPassword => "confirm-password",
            FormField::OtpCode => "otp",
        }
    }
}

#[derive(Clone, Copy)]
pub struct RegisterFormState {
    pub name: RwSignal<String>,
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
    pub confirm_password: RwSignal<String>,
    pub otp_code: RwSignal<String>,
}

impl Default for RegisterFormState {
    fn default() -> Self {
        Self {
            name: create_rw_signal(String::new()),
            email: create_rw_signal(String::new()),
            password: create_rw_signal(String::new()),
            confirm_password: create_rw_signal(String::new()),
            otp_code: create_rw_signal(String::new()),
        }
    }
}

impl RegisterFormState {
    pub fn signal(&self, field: FormField) -> RwSignal<String> {
        match field {
            FormField::Name => self.name,
            FormField::Email => self.email,
            FormField::Password => self.password,
            FormField::ConfirmPassword => self.confirm_password,
            FormField::OtpCode => self.otp_code,
        }
    }

    pub fn update(&self, field: FormField, value: String) {
        self.signal(field).set(value);
    }

    pub fn value(&self, field: FormField) -> String {
        self.signal(field).get_untracked()
    }

    /// Email as sent to the backend.
    pub fn email_address(&self) -> String {
        self.email.get_untracked().trim().to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitRejection {
    PasswordMismatch,
    OtpNotVerified,
}

impl SubmitRejection {
    pub fn message(self) -> &'static str {
        match self {
            SubmitRejection::PasswordMismatch => "Passwords don't match",
            SubmitRejection::OtpNotVerified => "Please verify OTP before submitting.",
        }
    }
}

/// Password match is checked before OTP verification.
pub fn check_submission(
    password: &str,
    confirm_password: &str,
    otp_verified: bool,
) -> Result<(), SubmitRejection> {
    if password != confirm_password {
        return Err(SubmitRejection::PasswordMismatch);
    }
    if !otp_verified {
        return Err(SubmitRejection::OtpNotVerified);
    }
    Ok(())
}

pub fn send_otp_label(otp_sent: bool) -> &'static str {
    if otp_sent {
        "OTP Sent"
    } else {
        "Send OTP"
    }
}

pub fn verify_otp_label(otp_verified: bool) -> &'static str {
    if otp_verified {
        "OTP Verified"
    } else {
        "Verify OTP"
    }
}

/// A verify-OTP message as shown to the user. `id` differs for every
/// publication, even when the text repeats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub message: String,
}

#[derive(Clone, Default)]
pub struct NoticeCounter(Rc<Cell<u64>>);

impl NoticeCounter {
    pub fn next(&self, message: String) -> Notice {
        let id = self.0.get() + 1;
        self.0.set(id);
        Notice { id, message }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowStep {
    SendOtp,
    VerifyOtp,
    Register,
}

impl FlowStep {
    fn slot(self) -> usize {
        match self {
            FlowStep::SendOtp => 0,
            FlowStep::VerifyOtp => 1,
            FlowStep::Register => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    step: FlowStep,
    seq: u64,
}

/// Hands out one increasing sequence per step. Only the newest ticket of a
/// step may apply its response.
#[derive(Clone, Default)]
pub struct RequestTracker {
    latest: Rc<[Cell<u64>; 3]>,
}

impl RequestTracker {
    pub fn begin(&self, step: FlowStep) -> Ticket {
        let cell = &self.latest[step.slot()];
        let seq = cell.get() + 1;
        cell.set(seq);
        Ticket { step, seq }
    }

    /// Makes every outstanding ticket of `step` stale.
    pub fn invalidate(&self, step: FlowStep) {
        let cell = &self.latest[step.slot()];
        cell.set(cell.get() + 1);
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest[ticket.step.slot()].get() == ticket.seq
    }
}
