//! Owner's listings.
//!
//! Refetches whenever `refresh` changes, e.g. after the wizard succeeds.

use leptos::*;

use crate::services::{HttpPropertyService, PropertyService};
use crate::PropertySummary;

#[component]
pub fn PropertyList(service: HttpPropertyService, refresh: ReadSignal<u32>) -> impl IntoView {
    let listings = create_local_resource(
        move || refresh.get(),
        move |_| {
            let service = service.clone();
            async move { service.list_my_properties().await }
        },
    );

    view! {
        <div class="property-list">
            {move || match listings.get() {
                None => view! { <div class="loading">"Loading your properties..."</div> }.into_view(),
                Some(Err(e)) => {
                    log::error!("❌ Failed to load properties: {}", e);
                    view! { <div class="error-message">{e.user_message()}</div> }.into_view()
                }
                Some(Ok(items)) if items.is_empty() => view! {
                    <div class="empty-state">"You have not listed any property yet."</div>
                }
                .into_view(),
                Some(Ok(items)) => items
                    .into_iter()
                    .map(|property| view! { <PropertyCard property=property/> })
                    .collect_view(),
            }}
        </div>
    }
}

#[component]
fn PropertyCard(property: PropertySummary) -> impl IntoView {
    let status = property.status.clone().unwrap_or_else(|| "pending".to_string());
    let subtitle = match &property.title_en {
        Some(en) if !en.is_empty() => en.clone(),
        _ => property.city.clone(),
    };

    view! {
        <div class="property-card">
            <div class="property-card-header">
                <div class="property-card-title" dir="rtl">{property.title_ar.clone()}</div>
                <span class=format!("status-badge status-{}", status)>{status.clone()}</span>
            </div>
            <div class="property-card-details">
                {subtitle} " • " {format!("{:.0} EGP / night", property.price_per_night)}
                " • " {format!("{} photos", property.image_count)}
            </div>
        </div>
    }
}
