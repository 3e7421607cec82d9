use yew::prelude::*;
use web_sys::{window, HtmlInputElement, HtmlSelectElement};

use crate::config;
use crate::lead::{self, Attribution, LeadSubmission, PackageTier};
use crate::tracking;

#[derive(Properties, PartialEq)]
pub struct LeadFormProps {
    pub tier: PackageTier,
    pub on_tier_change: Callback<PackageTier>,
    pub attribution: Attribution,
}

#[function_component(LeadForm)]
pub fn lead_form(props: &LeadFormProps) -> Html {
    let name = use_state(String::new);
    let city = use_state(String::new);
    let phone = use_state(String::new);
    let consent = use_state(|| false);
    let error = use_state(|| None::<&'static str>);

    let onsubmit = {
        let name = name.clone();
        let city = city.clone();
        let phone = phone.clone();
        let consent = consent.clone();
        let error = error.clone();
        let tier = props.tier;
        let attribution = props.attribution.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            error.set(None);

            let submission = LeadSubmission {
                name: (*name).clone(),
                city: (*city).clone(),
                phone_raw: (*phone).clone(),
                tier,
                consent: *consent,
            };

            match lead::validate(&submission) {
                Err(failure) => error.set(Some(failure.message())),
                Ok(()) => {
                    tracking::lead_submitted(submission.tier);

                    let message = lead::build_message(&submission, &attribution);
                    let link = lead::build_deep_link(config::get_wa_number(), &message);
                    if let Some(window) = window() {
                        let _ = window.location().set_href(&link);
                    }
                }
            }
        })
    };

    let on_tier_select = {
        let on_tier_change = props.on_tier_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_tier_change.emit(PackageTier::from_form_value(&select.value()));
        })
    };

    html! {
        <section id="lead-form" class="lead-form-section">
            <div class="lead-form-grid">
                <div class="lead-form-intro">
                    <h2>{"Isi Formulir & Mulai Konsultasi Gratis"}</h2>
                    <p>{"Tim kami akan menghubungi melalui WhatsApp untuk mengirimkan proposal kemitraan dan menjawab pertanyaan Anda."}</p>
                    <ul>
                        <li>{"• Respon cepat di jam kerja"}</li>
                        <li>{"• Data Anda aman dan tidak dibagikan"}</li>
                        <li>{"• Tanpa komitmen, konsultasi 100% gratis"}</li>
                    </ul>
                </div>
                <form class="lead-form" onsubmit={onsubmit}>
                    <div class="form-field">
                        <label for="lead-name">{"Nama Lengkap"}</label>
                        <input
                            id="lead-name"
                            type="text"
                            placeholder="Tulis nama Anda"
                            value={(*name).clone()}
                            onchange={let name = name.clone(); move |e: Event| {
                                let input: HtmlInputElement = e.target_unchecked_into();
                                name.set(input.value());
                            }}
                        />
                    </div>
                    <div class="form-field">
                        <label for="lead-city">{"Kota Domisili"}</label>
                        <input
                            id="lead-city"
                            type="text"
                            placeholder="Contoh: Yogyakarta"
                            value={(*city).clone()}
                            onchange={let city = city.clone(); move |e: Event| {
                                let input: HtmlInputElement = e.target_unchecked_into();
                                city.set(input.value());
                            }}
                        />
                    </div>
                    <div class="form-field">
                        <label for="lead-phone">{"Nomor WhatsApp"}</label>
                        <input
                            id="lead-phone"
                            type="text"
                            placeholder="Contoh: 0812xxxxxxx"
                            value={(*phone).clone()}
                            onchange={let phone = phone.clone(); move |e: Event| {
                                let input: HtmlInputElement = e.target_unchecked_into();
                                phone.set(input.value());
                            }}
                        />
                    </div>
                    <div class="form-field">
                        <label for="lead-tier">{"Paket Minat"}</label>
                        <select id="lead-tier" onchange={on_tier_select}>
                            <option value="PLATINUM" selected={props.tier == PackageTier::Platinum}>
                                {"PLATINUM"}
                            </option>
                            <option value="PROFESIONAL" selected={props.tier == PackageTier::Profesional}>
                                {"PROFESIONAL"}
                            </option>
                        </select>
                    </div>
                    <div class="form-consent">
                        <input
                            id="lead-consent"
                            type="checkbox"
                            checked={*consent}
                            onchange={let consent = consent.clone(); move |e: Event| {
                                let input: HtmlInputElement = e.target_unchecked_into();
                                consent.set(input.checked());
                            }}
                        />
                        <label for="lead-consent">
                            {"Saya setuju data saya digunakan untuk keperluan konsultasi kemitraan sesuai Kebijakan Privasi."}
                        </label>
                    </div>
                    {
                        if let Some(message) = *error {
                            html! { <div class="form-error">{message}</div> }
                        } else {
                            html! {}
                        }
                    }
                    <button type="submit" class="form-submit">{"Kirim & WhatsApp Kami"}</button>
                    <p class="form-footnote">{"Dengan menekan tombol ini Anda akan diarahkan ke WhatsApp official DRW."}</p>
                </form>
            </div>
        </section>
    }
}
