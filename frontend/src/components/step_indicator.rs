use leptos::*;

use crate::wizard::WizardStep;

#[component]
pub fn StepIndicator(step: Memo<WizardStep>) -> impl IntoView {
    view! {
        <ol class="wizard-steps">
            {WizardStep::EDITABLE
                .into_iter()
                .map(|s| {
                    let active = move || step.get().number() == s.number();
                    let done = move || step.get().number() > s.number();
                    view! {
                        <li class="wizard-step" class:active=active class:done=done>
                            <span class="wizard-step-number">{s.number()}</span>
                            <span class="wizard-step-title">{s.title()}</span>
                        </li>
                    }
                })
                .collect_view()}
        </ol>
    }
}
