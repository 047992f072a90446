use crate::system::auth::context::{do_login, use_auth};
use contracts::system::auth::LoginRequest;
use leptos::prelude::*;

#[component]
pub fn LoginPage() -> impl IntoView {
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);

    let (_, set_session) = use_auth();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let request = LoginRequest {
            username: username.get_untracked(),
            password: password.get_untracked(),
        };

        // A successful login flips the session, which switches to MainLayout
        match do_login(set_session, &request) {
            Ok(()) => set_error_message.set(None),
            Err(e) => {
                set_password.set(String::new());
                set_error_message.set(Some(e.to_string()));
            }
        }
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Admin Panel"</h1>
                <h2>"Iniciar sesión"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="username">"Usuario"</label>
                        <input
                            type="text"
                            id="username"
                            placeholder="Introduce tu usuario"
                            prop:value=move || username.get()
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                            required
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Contraseña"</label>
                        <input
                            type="password"
                            id="password"
                            placeholder="Introduce tu contraseña"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required
                        />
                    </div>

                    <button type="submit" class="btn-primary">
                        "Entrar"
                    </button>
                </form>
            </div>
        </div>
    }
}
