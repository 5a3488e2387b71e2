// Identity returned by the provider after a successful sign-in.
#[derive(Clone, Debug)]
pub struct AuthResult {
    pub uid: String,
    pub email_verified: bool,
}

// Freshly created account plus the short-lived token needed to
// trigger the verification email for it.
#[derive(Clone, Debug)]
pub struct NewAccount {
    pub uid: String,
    pub id_token: String,
}
