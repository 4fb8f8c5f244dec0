use leptos::{prelude::*, task::spawn_local};
use leptos_router::{
    components::A,
    hooks::{use_navigate, use_query_map},
};
use thaw::*;

use crate::auth_client::{OAuthProvider, SignUpOutcome};
use crate::server::{current_user, request_password_reset, sign_in, sign_up, social_sign_in_url};
use crate::session::{use_session, AuthSession};

/// Only same-site paths are followed after sign-in. Browsers treat `\` as
/// `/`, so a backslash anywhere is refused along with `//host`.
pub fn safe_redirect(target: Option<String>) -> String {
    target
        .filter(|t| t.starts_with('/') && !t.starts_with("//") && !t.contains('\\'))
        .unwrap_or_else(|| "/".to_string())
}

/// Tokens handed back in the URL fragment after a social sign-in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallbackTokens {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub expires_at: Option<i64>,
}

pub fn parse_oauth_fragment(hash: &str, now: i64) -> Option<CallbackTokens> {
    let mut access_token = None;
    let mut refresh_token = None;
    let mut expires_at = None;
    let mut expires_in = None;

    for pair in hash.trim_start_matches('#').split('&') {
        let Some((key, value)) = pair.split_once('=') else {
            continue;
        };
        let value = urlencoding::decode(value).ok()?.into_owned();
        match key {
            "access_token" => access_token = Some(value),
            "refresh_token" => refresh_token = Some(value),
            "expires_at" => expires_at = value.parse::<i64>().ok(),
            "expires_in" => expires_in = value.parse::<i64>().ok(),
            _ => {}
        }
    }

    Some(CallbackTokens {
        access_token: access_token.filter(|t| !t.is_empty())?,
        refresh_token,
        expires_at: expires_at.or_else(|| expires_in.map(|secs| now + secs)),
    })
}

fn browser_origin() -> String {
    web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .unwrap_or_default()
}

#[component]
fn SocialSignIn(redirect: Signal<String>) -> impl IntoView {
    let error_message = RwSignal::new(Option::<String>::None);

    let start = move |provider: OAuthProvider| {
        error_message.set(None);
        let callback = format!(
            "{}/auth/callback?redirect={}",
            browser_origin(),
            urlencoding::encode(&redirect.get_untracked())
        );
        spawn_local(async move {
            match social_sign_in_url(provider, callback).await {
                Ok(url) => {
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href(&url);
                    }
                }
                Err(e) => error_message.set(Some(format!("{} sign-in failed: {}", provider.label(), e))),
            }
        });
    };

    view! {
        <div class="auth-social">
            <p class="auth-social__divider">"or continue with"</p>
            <div class="auth-social__buttons">
                {[OAuthProvider::Google, OAuthProvider::Github, OAuthProvider::Facebook]
                    .into_iter()
                    .map(|provider| view! {
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| start(provider)
                        >
                            {provider.label()}
                        </Button>
                    })
                    .collect::<Vec<_>>()}
            </div>
            {move || error_message.get().map(|msg| view! {
                <div class="auth-error-message">{msg}</div>
            })}
        </div>
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let query_map = use_query_map();
    let navigate = use_navigate();
    let session = use_session();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let loading = RwSignal::new(false);
    let error_message = RwSignal::new(Option::<String>::None);

    let redirect = Signal::derive(move || safe_redirect(query_map.get().get("redirect")));

    let is_button_disabled =
        Memo::new(move |_| email.get().trim().is_empty() || password.get().is_empty());

    let submit_login = move |_| {
        loading.set(true);
        error_message.set(None);
        let navigate = navigate.clone();

        spawn_local(async move {
            match sign_in(email.get_untracked(), password.get_untracked()).await {
                Ok(auth_session) => {
                    session.sign_in(auth_session);
                    navigate(&redirect.get_untracked(), Default::default());
                }
                Err(e) => error_message.set(Some(format!("Sign in failed: {}", e))),
            }
            loading.set(false);
        });
    };

    view! {
        <div class="auth-container">
            <div class="auth-card">
                <div class="auth-header">
                    <h1>"Welcome Back"</h1>
                    <p>"Sign in to book tickets and see your bookings"</p>
                </div>

                <form on:submit=move |ev| {
                    ev.prevent_default();
                    submit_login(());
                }>
                    <div class="auth-form-group">
                        <Input
                            class="auth-input"
                            placeholder="Email"
                            input_type=InputType::Email
                            value=email
                        />
                    </div>
                    <div class="auth-form-group">
                        <Input
                            class="auth-input"
                            placeholder="Password"
                            input_type=InputType::Password
                            value=password
                        />
                    </div>

                    {move || error_message.get().map(|msg| view! {
                        <div class="auth-error-message">{msg}</div>
                    })}

                    <Button
                        class="auth-submit-btn"
                        button_type=ButtonType::Submit
                        loading=Signal::from(loading)
                        disabled=Signal::from(is_button_disabled)
                    >
                        "Sign In"
                    </Button>
                </form>

                <SocialSignIn redirect=redirect />

                <div class="auth-footer">
                    <p>
                        <A href="/forgot-password">"Forgot your password?"</A>
                    </p>
                    <p>
                        "Don't have an account? "
                        <A href=move || format!("/signup?redirect={}", urlencoding::encode(&redirect.get()))>"Sign up here"</A>
                    </p>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let query_map = use_query_map();
    let navigate = use_navigate();
    let session = use_session();

    let full_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let loading = RwSignal::new(false);
    let error_message = RwSignal::new(Option::<String>::None);
    let success_message = RwSignal::new(Option::<String>::None);

    let redirect = Signal::derive(move || safe_redirect(query_map.get().get("redirect")));

    let is_button_disabled = Memo::new(move |_| {
        email.get().trim().is_empty() || password.get().is_empty() || confirm_password.get().is_empty()
    });

    let submit_signup = move |_| {
        error_message.set(None);
        success_message.set(None);

        if password.get_untracked() != confirm_password.get_untracked() {
            error_message.set(Some("Passwords do not match".to_string()));
            return;
        }

        loading.set(true);
        let navigate = navigate.clone();
        let name = Some(full_name.get_untracked()).filter(|n| !n.trim().is_empty());

        spawn_local(async move {
            match sign_up(email.get_untracked(), password.get_untracked(), name).await {
                Ok(SignUpOutcome::SignedIn(auth_session)) => {
                    session.sign_in(auth_session);
                    navigate(&redirect.get_untracked(), Default::default());
                }
                Ok(SignUpOutcome::ConfirmationRequired { email }) => {
                    success_message.set(Some(format!(
                        "Almost there! Check {} for a confirmation link, then sign in.",
                        email
                    )));
                }
                Err(e) => error_message.set(Some(format!("Sign up failed: {}", e))),
            }
            loading.set(false);
        });
    };

    view! {
        <div class="auth-container">
            <div class="auth-card">
                <div class="auth-header">
                    <h1>"Create an Account"</h1>
                    <p>"Book tickets faster and keep them in one place"</p>
                </div>

                {move || success_message.get().map(|msg| view! {
                    <div class="auth-success-message">
                        <span class="auth-success-icon">"✓"</span>
                        <p>{msg}</p>
                    </div>
                })}

                <form on:submit=move |ev| {
                    ev.prevent_default();
                    submit_signup(());
                }>
                    <div class="auth-form-group">
                        <Input class="auth-input" placeholder="Full name (optional)" value=full_name />
                    </div>
                    <div class="auth-form-group">
                        <Input class="auth-input" placeholder="Email" input_type=InputType::Email value=email />
                    </div>
                    <div class="auth-form-group">
                        <Input class="auth-input" placeholder="Password" input_type=InputType::Password value=password />
                    </div>
                    <div class="auth-form-group">
                        <Input
                            class="auth-input"
                            placeholder="Confirm password"
                            input_type=InputType::Password
                            value=confirm_password
                        />
                    </div>

                    {move || error_message.get().map(|msg| view! {
                        <div class="auth-error-message">{msg}</div>
                    })}

                    <Button
                        class="auth-submit-btn"
                        button_type=ButtonType::Submit
                        loading=Signal::from(loading)
                        disabled=Signal::from(is_button_disabled)
                    >
                        "Sign Up"
                    </Button>
                </form>

                <SocialSignIn redirect=redirect />

                <div class="auth-footer">
                    <p>
                        "Already have an account? "
                        <A href="/login">"Sign in"</A>
                    </p>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let loading = RwSignal::new(false);
    let sent = RwSignal::new(false);
    let error_message = RwSignal::new(Option::<String>::None);

    let submit = move |_| {
        loading.set(true);
        error_message.set(None);
        let redirect_to = format!("{}/login", browser_origin());

        spawn_local(async move {
            match request_password_reset(email.get_untracked(), redirect_to).await {
                Ok(()) => sent.set(true),
                Err(e) => error_message.set(Some(e.to_string())),
            }
            loading.set(false);
        });
    };

    view! {
        <div class="auth-container">
            <div class="auth-card">
                <div class="auth-header">
                    <h1>"Reset Password"</h1>
                    <p>"We'll email you a link to choose a new password"</p>
                </div>

                <Show
                    when=move || !sent.get()
                    fallback=move || view! {
                        <div class="auth-success-message">
                            <span class="auth-success-icon">"✓"</span>
                            <p>{move || format!("If an account exists for {}, a reset link is on its way.", email.get())}</p>
                        </div>
                    }
                >
                    <form on:submit=move |ev| {
                        ev.prevent_default();
                        submit(());
                    }>
                        <div class="auth-form-group">
                            <Input class="auth-input" placeholder="Email" input_type=InputType::Email value=email />
                        </div>

                        {move || error_message.get().map(|msg| view! {
                            <div class="auth-error-message">{msg}</div>
                        })}

                        <Button
                            class="auth-submit-btn"
                            button_type=ButtonType::Submit
                            loading=Signal::from(loading)
                        >
                            "Send Reset Link"
                        </Button>
                    </form>
                </Show>

                <div class="auth-footer">
                    <p><A href="/login">"Back to sign in"</A></p>
                </div>
            </div>
        </div>
    }
}

/// Landing page for social sign-in. Reads the tokens from the URL fragment,
/// looks up the user and stores the session.
#[component]
pub fn AuthCallbackPage() -> impl IntoView {
    let query_map = use_query_map();
    let navigate = use_navigate();
    let session = use_session();
    let error_message = RwSignal::new(Option::<String>::None);

    Effect::new(move |_| {
        let hash = web_sys::window()
            .and_then(|window| window.location().hash().ok())
            .unwrap_or_default();
        let Some(tokens) = parse_oauth_fragment(&hash, chrono::Utc::now().timestamp()) else {
            error_message.set(Some("The sign-in link is missing its access token.".to_string()));
            return;
        };
        let redirect = safe_redirect(query_map.get_untracked().get("redirect"));
        let navigate = navigate.clone();

        spawn_local(async move {
            match current_user(tokens.access_token.clone()).await {
                Ok(Some(user)) => {
                    session.sign_in(AuthSession {
                        access_token: tokens.access_token,
                        refresh_token: tokens.refresh_token,
                        expires_at: tokens.expires_at,
                        user,
                    });
                    navigate(&redirect, Default::default());
                }
                Ok(None) => error_message.set(Some("The sign-in link has expired.".to_string())),
                Err(e) => error_message.set(Some(format!("Sign in failed: {}", e))),
            }
        });
    });

    view! {
        <div class="auth-container">
            <div class="auth-card">
                {move || match error_message.get() {
                    Some(msg) => view! {
                        <div class="auth-error-message">{msg}</div>
                        <A href="/login">"Back to sign in"</A>
                    }.into_any(),
                    None => view! { <p>"Signing you in..."</p> }.into_any(),
                }}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redirects_stay_on_site() {
        assert_eq!(safe_redirect(Some("/events/evt-1".into())), "/events/evt-1");
        assert_eq!(safe_redirect(Some("//evil.example".into())), "/");
        assert_eq!(safe_redirect(Some("https://evil.example".into())), "/");
        assert_eq!(safe_redirect(Some("/\\evil.example".into())), "/");
        assert_eq!(safe_redirect(Some("/events\\..\\x".into())), "/");
        assert_eq!(safe_redirect(None), "/");
    }

    #[test]
    fn parses_callback_fragment() {
        let tokens = parse_oauth_fragment(
            "#access_token=abc.def&expires_in=3600&refresh_token=r%2B1&token_type=bearer",
            1_000,
        )
        .unwrap();
        assert_eq!(tokens.access_token, "abc.def");
        assert_eq!(tokens.refresh_token.as_deref(), Some("r+1"));
        assert_eq!(tokens.expires_at, Some(4_600));

        let explicit = parse_oauth_fragment("access_token=x&expires_at=99&expires_in=5", 0).unwrap();
        assert_eq!(explicit.expires_at, Some(99));
    }

    #[test]
    fn fragment_without_token_is_rejected() {
        assert!(parse_oauth_fragment("#error=access_denied", 0).is_none());
        assert!(parse_oauth_fragment("", 0).is_none());
        assert!(parse_oauth_fragment("#access_token=", 0).is_none());
    }
}
