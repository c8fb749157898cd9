use super::{
    client::{decode_json, ApiClient},
    types::{
        AdminRegisterRequest, AdminRegisterResponse, ApiError, MessageResponse, SendOtpRequest,
        VerifyOtpRequest,
    },
};

impl ApiClient {
    /// Asks the backend to mail a one-time passcode. Any 2xx counts as sent.
    pub async fn send_otp(&self, email: &str) -> Result<(), ApiError> {
        let request = SendOtpRequest {
            email: email.to_string(),
        };
        self.post_json("/api/sendotp", &request).await.map(|_| ())
    }

    pub async fn verify_otp(&self, email: &str, otp: &str) -> Result<MessageResponse, ApiError> {
        let request = VerifyOtpRequest {
            email: email.to_string(),
            otp: otp.to_string(),
        };
        let response = self.post_json("/api/verifyotp", &request).await?;
        decode_json(response).await
    }

    pub async fn register_admin(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AdminRegisterResponse, ApiError> {
        let request = AdminRegisterRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response = self.post_json("/api/admin/register", &request).await?;
        decode_json(response).await
    }
}
