use leptos::prelude::*;
use service_desk::validation::{FieldErrors, OnboardingForm, OnboardingStep};

const REQUIRED_DOCUMENTS: [&str; 3] = ["ID Proof", "Address Proof", "Skill Certificate"];

/// 单个输入框及其错误提示
#[component]
fn Field(
    label: &'static str,
    field: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    value: RwSignal<String>,
    errors: ReadSignal<FieldErrors>,
) -> impl IntoView {
    let error = move || errors.get().get(field).map(str::to_string);
    view! {
        <div class="form-control">
            <label class="label">
                <span class="label-text">{label}</span>
            </label>
            <input
                type=input_type
                class=move || {
                    if error().is_some() { "input input-bordered input-error" } else { "input input-bordered" }
                }
                on:input=move |ev| value.set(event_target_value(&ev))
                prop:value=value
            />
            {move || error().map(|msg| view! {
                <label class="label"><span class="label-text-alt text-error">{msg}</span></label>
            })}
        </div>
    }
}

#[component]
pub fn TechnicianOnboardPage() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let city = RwSignal::new(String::new());
    let skills = RwSignal::new(String::new());
    let experience_years = RwSignal::new(String::new());

    let (step, set_step) = signal(OnboardingStep::Details);
    let (errors, set_errors) = signal(FieldErrors::new());

    let to_form = move || OnboardingForm {
        name: name.get(),
        email: email.get(),
        phone: phone.get(),
        city: city.get(),
        skills: skills.get(),
        experience_years: experience_years.get(),
    };

    let on_next = move |_| match step.get_untracked().next(&to_form()) {
        Ok(next) => {
            set_errors.set(FieldErrors::new());
            set_step.set(next);
        }
        Err(field_errors) => set_errors.set(field_errors),
    };

    let step_class = move |n: u8| {
        if step.get().number() >= n { "step step-primary" } else { "step" }
    };

    view! {
        <div class="container mx-auto px-4 py-8 max-w-2xl">
            <h1 class="text-3xl font-bold mb-2">"Join as a Technician"</h1>
            <ul class="steps w-full mb-6">
                <li class=move || step_class(1)>"Your details"</li>
                <li class=move || step_class(2)>"Documents"</li>
            </ul>

            <div class="card bg-base-100 shadow-xl">
                <div class="card-body">
                    <Show
                        when=move || step.get() == OnboardingStep::Details
                        fallback=move || {
                            let skill_list = to_form().skill_list().join(", ");
                            view! {
                                <p class="text-base-content/70">
                                    "Upload the following documents for " {name.get()} " (" {skill_list} ")."
                                </p>
                                {REQUIRED_DOCUMENTS
                                    .iter()
                                    .map(|doc| view! {
                                        <div class="form-control">
                                            <label class="label"><span class="label-text">{*doc}</span></label>
                                            <input type="file" class="file-input file-input-bordered w-full" />
                                        </div>
                                    })
                                    .collect_view()}
                                <div class="card-actions justify-between mt-4">
                                    <button
                                        class="btn btn-ghost"
                                        on:click=move |_| set_step.update(|s| *s = s.back())
                                    >
                                        "Back"
                                    </button>
                                </div>
                            }
                        }
                    >
                        <div class="grid gap-2 md:grid-cols-2">
                            <Field label="Full name" field="name" value=name errors=errors />
                            <Field label="Email" field="email" input_type="email" value=email errors=errors />
                            <Field label="Phone" field="phone" input_type="tel" value=phone errors=errors />
                            <Field label="City" field="city" value=city errors=errors />
                            <Field label="Skills (comma separated)" field="skills" value=skills errors=errors />
                            <Field
                                label="Experience (years)"
                                field="experience_years"
                                input_type="number"
                                value=experience_years
                                errors=errors
                            />
                        </div>
                        <div class="card-actions justify-end mt-4">
                            <button class="btn btn-primary" on:click=on_next>"Next"</button>
                        </div>
                    </Show>
                </div>
            </div>
        </div>
    }
}
