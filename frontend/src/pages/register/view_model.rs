use super::{
    repository::RegisterRepository,
    utils::{
        check_submission, FlowStep, FormField, Notice, NoticeCounter, RegisterFormState,
        RequestTracker, REGISTRATION_FAILED, SEND_OTP_FAILED, VERIFY_OTP_FAILED,
    },
};
use crate::{
    api::ApiClient,
    router::DASHBOARD_PATH,
    utils::{
        navigation::{use_navigator, Navigator},
        storage::{use_token_store, TokenStore},
    },
};
use leptos::*;
use std::rc::Rc;

/// State and transitions of one registration attempt.
#[derive(Clone)]
pub struct RegisterFlow {
    pub form: RegisterFormState,
    pub otp_sent: RwSignal<bool>,
    pub otp_verified: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    /// Raw message of the last verify-OTP response.
    pub notice: RwSignal<Option<Notice>>,
    repository: RegisterRepository,
    tokens: TokenStore,
    navigator: Navigator,
    requests: RequestTracker,
    notices: NoticeCounter,
}

impl RegisterFlow {
    pub fn new(repository: RegisterRepository, tokens: TokenStore, navigator: Navigator) -> Self {
        Self {
            form: RegisterFormState::default(),
            otp_sent: create_rw_signal(false),
            otp_verified: create_rw_signal(false),
            error: create_rw_signal(None),
            notice: create_rw_signal(None),
            repository,
            tokens,
            navigator,
            requests: RequestTracker::default(),
            notices: NoticeCounter::default(),
        }
    }

    pub fn update_field(&self, field: FormField, value: String) {
        // A new address needs a new OTP; answers for the old one are dropped.
        if field == FormField::Email && self.form.email_address() != value.trim() {
            self.requests.invalidate(FlowStep::SendOtp);
            self.requests.invalidate(FlowStep::VerifyOtp);
            self.otp_sent.set(false);
            self.otp_verified.set(false);
        }
        self.form.update(field, value);
    }

    pub async fn send_otp(&self) {
        if self.otp_sent.get_untracked() {
            log::debug!("OTP already sent; ignoring request");
            return;
        }
        let email = self.form.email_address();
        let ticket = self.requests.begin(FlowStep::SendOtp);
        let result = self.repository.send_otp(&email).await;
        if !self.requests.is_current(ticket) {
            log::debug!("Discarding stale send-OTP response");
            return;
        }

        match result {
            Ok(()) => {
                log::info!("OTP sent");
                self.otp_sent.set(true);
            }
            Err(err) => {
                log::warn!("Sending OTP failed: {} ({})", err, err.code);
                self.error.set(Some(SEND_OTP_FAILED.to_string()));
            }
        }
    }

    pub async fn verify_otp(&self) {
        if self.otp_verified.get_untracked() {
            log::debug!("OTP already verified; ignoring request");
            return;
        }
        let email = self.form.email_address();
        let otp = self.form.value(FormField::OtpCode);
        let ticket = self.requests.begin(FlowStep::VerifyOtp);
        let result = self.repository.verify_otp(&email, &otp).await;
        if !self.requests.is_current(ticket) {
            log::debug!("Discarding stale verify-OTP response");
            return;
        }

        match result {
            Ok(response) => {
                let verified = response.is_otp_verified();
                log::info!("OTP verification answered, verified = {}", verified);
                self.notice.set(Some(self.notices.next(response.message)));
                self.otp_verified.set(verified);
            }
            Err(err) => {
                log::warn!("Verifying OTP failed: {} ({})", err, err.code);
                self.error.set(Some(VERIFY_OTP_FAILED.to_string()));
            }
        }
    }

    pub async fn submit(&self) {
        let password = self.form.value(FormField::Password);
        let confirm_password = self.form.value(FormField::ConfirmPassword);
        if let Err(rejection) =
            check_submission(&password, &confirm_password, self.otp_verified.get_untracked())
        {
            self.error.set(Some(rejection.message().to_string()));
            return;
        }

        let email = self.form.email_address();
        let ticket = self.requests.begin(FlowStep::Register);
        let result = self.repository.register(&email, &password).await;
        if !self.requests.is_current(ticket) {
            log::debug!("Discarding stale registration response");
            return;
        }

        let token = match result {
            Ok(response) => response.token,
            Err(err) => {
                log::warn!("Registration failed: {} ({})", err, err.code);
                self.error.set(Some(REGISTRATION_FAILED.to_string()));
                return;
            }
        };
        if let Err(err) = self.tokens.save(&token) {
            log::error!("Could not persist admin token: {}", err);
            self.error.set(Some(REGISTRATION_FAILED.to_string()));
            return;
        }

        log::info!("Admin registered");
        self.navigator.go(DASHBOARD_PATH);
    }
}

#[derive(Clone)]
pub struct RegisterViewModel {
    pub flow: RegisterFlow,
    pub send_otp_action: Action<(), ()>,
    pub verify_otp_action: Action<(), ()>,
    pub submit_action: Action<(), ()>,
}

pub fn use_register_view_model() -> RegisterViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = RegisterRepository::new_with_client(Rc::new(api));
    register_view_model(RegisterFlow::new(
        repository,
        use_token_store(),
        use_navigator(),
    ))
}

pub fn register_view_model(flow: RegisterFlow) -> RegisterViewModel {
    let flow_for_send = flow.clone();
    let send_otp_action = create_action(move |_: &()| {
        let flow = flow_for_send.clone();
        async move { flow.send_otp().await }
    });

    let flow_for_verify = flow.clone();
    let verify_otp_action = create_action(move |_: &()| {
        let flow = flow_for_verify.clone();
        async move { flow.verify_otp().await }
    });

    let flow_for_submit = flow.clone();
    let submit_action = create_action(move |_: &()| {
        let flow = flow_for_submit.clone();
        async move { flow.submit().await }
    });

    RegisterViewModel {
        flow,
        send_otp_action,
        verify_otp_action,
        submit_action,
    }
}
