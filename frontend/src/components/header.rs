use leptos::*;

#[component]
pub fn Header(
    /// Whether an auth token was found at start-up
    signed_in: bool,
    on_add: Callback<()>,
) -> impl IntoView {
    view! {
        <header>
            <div class="header-left">
                <a href="/" class="logo">"SAKAN"</a>
                <span class="badge">"Host"</span>
            </div>
            <div class="header-right">
                <div class="auth-status" class:connected=signed_in>
                    <span class="auth-dot" class:connected=signed_in></span>
                    {if signed_in { "Signed in" } else { "Not signed in" }}
                </div>
                <button
                    class="btn btn-primary"
                    on:click=move |_| on_add.call(())
                    disabled=!signed_in
                >
                    "+ Add property"
                </button>
            </div>
        </header>
    }
}
