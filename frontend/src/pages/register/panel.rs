use super::{
    components::{field::FormInput, messages::OtpNotice},
    utils::{send_otp_label, verify_otp_label, FormField},
    view_model::{use_register_view_model, RegisterFlow},
};
use crate::{components::error::InlineErrorMessage, router::SIGN_IN_PATH};
use leptos::{ev::SubmitEvent, *};

fn field_input(flow: &RegisterFlow, field: FormField) -> Callback<String> {
    let flow = flow.clone();
    Callback::new(move |value: String| flow.update_field(field, value))
}

#[component]
pub fn RegisterPanel() -> impl IntoView {
    let vm = use_register_view_model();
    let flow = vm.flow.clone();
    let form = flow.form;
    let otp_sent = flow.otp_sent;
    let otp_verified = flow.otp_verified;
    let error = flow.error;
    let notice = flow.notice;

    let send_otp_action = vm.send_otp_action;
    let verify_otp_action = vm.verify_otp_action;
    let submit_action = vm.submit_action;
    let sending = send_otp_action.pending();
    let verifying = verify_otp_action.pending();
    let submitting = submit_action.pending();

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        submit_action.dispatch(());
    };

    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-8">
                <div>
                    <h2 class="mt-6 text-center text-3xl font-extrabold text-fg">
                        "Create your account"
                    </h2>
                    <p class="mt-2 text-center text-sm text-fg-muted">
                        "Or "
                        // Served outside this app, so skip client-side routing.
                        <a
                            href=SIGN_IN_PATH
                            rel="external"
                            class="font-medium text-link hover:text-link-hover"
                        >
                            "sign in to your existing account"
                        </a>
                    </p>
                </div>

                <InlineErrorMessage error=error />
                <OtpNotice notice=notice />

                <form class="space-y-6" on:submit=handle_submit>
                    <FormInput
                        field=FormField::Name
                        label="Name"
                        input_type="text"
                        autocomplete="name"
                        placeholder="Name"
                        value={form.name}
                        on_input={field_input(&flow, FormField::Name)}
                    />
                    <div class="space-y-2">
                        <FormInput
                            field=FormField::Email
                            label="Email address"
                            input_type="email"
                            autocomplete="email"
                            placeholder="Email"
                            value={form.email}
                            on_input={field_input(&flow, FormField::Email)}
                        />
                        <button
                            type="button"
                            class="w-full flex justify-center py-2 px-4 border border-action-secondary-border text-sm font-medium rounded-md text-action-secondary-text bg-action-secondary-bg hover:bg-action-secondary-bg_hover disabled:opacity-50"
                            disabled=move || otp_sent.get() || sending.get()
                            on:click=move |_| send_otp_action.dispatch(())
                        >
                            {move || send_otp_label(otp_sent.get())}
                        </button>
                    </div>
                    <div class="space-y-2">
                        <FormInput
                            field=FormField::OtpCode
                            label="OTP"
                            input_type="text"
                            autocomplete="one-time-code"
                            placeholder="Enter OTP"
                            value={form.otp_code}
                            on_input={field_input(&flow, FormField::OtpCode)}
                        />
                        <button
                            type="button"
                            class="w-full flex justify-center py-2 px-4 border border-action-secondary-border text-sm font-medium rounded-md text-action-secondary-text bg-action-secondary-bg hover:bg-action-secondary-bg_hover disabled:opacity-50"
                            disabled=move || otp_verified.get() || verifying.get()
                            on:click=move |_| verify_otp_action.dispatch(())
                        >
                            {move || verify_otp_label(otp_verified.get())}
                        </button>
                    </div>
                    <FormInput
                        field=FormField::Password
                        label="Password"
                        input_type="password"
                        autocomplete="new-password"
                        placeholder="Password"
                        value={form.password}
                        on_input={field_input(&flow, FormField::Password)}
                    />
                    <FormInput
                        field=FormField::ConfirmPassword
                        label="Confirm Password"
                        input_type="password"
                        autocomplete="new-password"
                        placeholder="Confirm Password"
                        value={form.confirm_password}
                        on_input={field_input(&flow, FormField::ConfirmPassword)}
                    />
                    <div>
                        <button
                            type="submit"
                            disabled=move || submitting.get()
                            class="group relative w-full flex justify-center py-2 px-4 border border-transparent text-sm font-medium rounded-md text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg_hover focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-action-primary-focus disabled:opacity-50"
                        >
                            {move || if submitting.get() { "Signing up..." } else { "Sign up" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
