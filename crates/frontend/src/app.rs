use crate::routes::routes::AppRoutes;
use crate::shared::alert::AlertHost;
use crate::shared::config::{load_config, Config};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    match load_config() {
        Ok(config) => {
            log::info!("API base URL: {}", config.api.base_url);
            provide_context::<Config>(config);

            view! {
                <AlertHost>
                    <AppRoutes />
                </AlertHost>
            }
            .into_any()
        }
        Err(e) => {
            log::error!("Failed to load configuration: {:#}", e);
            view! {
                <div class="warning-box" style="background: var(--color-error-50); border-color: var(--color-error-100); margin: var(--spacing-lg);">
                    <span class="warning-box__icon" style="color: var(--color-error);">"⚠"</span>
                    <span class="warning-box__text" style="color: var(--color-error);">
                        {format!("Configuration error: {}", e)}
                    </span>
                </div>
            }
            .into_any()
        }
    }
}
