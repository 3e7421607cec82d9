use yew::prelude::*;
use web_sys::{window, MouseEvent, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::components::chat_widget::ChatWidget;
use crate::components::faq::FaqItem;
use crate::components::lead_form::LeadForm;
use crate::lead::{Attribution, PackageTier};
use crate::tracking;

// Smooth-scrolls to the lead form and reports the CTA engagement. Every
// "join" button on the page funnels through here.
fn scroll_to_form() {
    tracking::form_cta_clicked();
    if let Some(document) = window().and_then(|w| w.document()) {
        if let Some(form) = document.get_element_by_id("lead-form") {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            form.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let selected_tier = use_state(PackageTier::default);

    // Captured once per page visit; the query string never changes
    // without a full navigation.
    let attribution = use_state(|| {
        window()
            .and_then(|w| w.location().search().ok())
            .map(|search| Attribution::from_query(&search))
            .unwrap_or_default()
    });

    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                tracking::landing_view();
                || ()
            },
            (),
        );
    }

    // Fires on mount for the default tier and again on every change.
    {
        use_effect_with_deps(
            move |tier: &PackageTier| {
                tracking::tier_view(*tier);
                || ()
            },
            *selected_tier,
        );
    }

    let cta_scroll = Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        scroll_to_form();
    });

    let select_platinum = {
        let selected_tier = selected_tier.clone();
        Callback::from(move |_: MouseEvent| {
            tracking::tier_selected(PackageTier::Platinum);
            selected_tier.set(PackageTier::Platinum);
            scroll_to_form();
        })
    };

    let select_profesional = {
        let selected_tier = selected_tier.clone();
        Callback::from(move |_: MouseEvent| {
            tracking::tier_selected(PackageTier::Profesional);
            selected_tier.set(PackageTier::Profesional);
            scroll_to_form();
        })
    };

    let on_tier_change = {
        let selected_tier = selected_tier.clone();
        Callback::from(move |tier: PackageTier| {
            selected_tier.set(tier);
        })
    };

    let year = js_sys::Date::new_0().get_full_year();

    html! {
        <div class="landing-page">
            <header class="top-nav">
                <div class="nav-content">
                    <div class="nav-brand">
                        <span class="nav-logo-badge">{"DRW"}</span>
                        <span class="nav-brand-name">{"DRW Beauty Center"}</span>
                    </div>
                    <nav class="nav-links">
                        <a href="#benefits">{"Benefit"}</a>
                        <a href="#showcase">{"Portofolio"}</a>
                        <a href="#packages">{"Paket"}</a>
                        <a href="#faq">{"FAQ"}</a>
                    </nav>
                    <button class="nav-cta" onclick={cta_scroll.clone()}>{"Konsultasi Gratis"}</button>
                </div>
            </header>

            <section class="hero">
                <div class="hero-grid">
                    <div class="hero-copy">
                        <h1>
                            {"Bangun Beauty Center Impianmu"}
                            <span class="hero-accent">{" Bersama DRW Skincare"}</span>
                        </h1>
                        <p>{"Peluang bisnis kecantikan terpercaya dengan sistem kemitraan yang sudah terbukti sukses di seluruh Indonesia."}</p>
                        <div class="hero-cta-group">
                            <button class="hero-cta" onclick={cta_scroll.clone()}>
                                {"Gabung Jadi Mitra Sekarang"}
                            </button>
                            <a class="hero-secondary" href="#showcase">{"Lihat Portofolio"}</a>
                        </div>
                        <div class="hero-trust">
                            <span>{"Brand 10+ tahun"}</span>
                            <span>{"Produk BPOM"}</span>
                            <span>{"Support menyeluruh"}</span>
                        </div>
                    </div>
                    <div class="hero-visual">
                        <img src="/images/hero.webp" alt="DRW Beauty Center" loading="lazy" />
                    </div>
                </div>
            </section>

            <section class="problem-solution">
                <div class="problem-card">
                    <h2>{"Kendala Memulai Bisnis Kecantikan"}</h2>
                    <ul>
                        <li>{"• Bingung harus mulai dari mana"}</li>
                        <li>{"• Takut gagal tanpa support yang jelas"}</li>
                        <li>{"• Minim pengalaman dan tim"}</li>
                        <li>{"• Ragu produk yang tepat dan aman"}</li>
                    </ul>
                </div>
                <div class="solution-card">
                    <h3>{"Solusi DRW Beauty Center"}</h3>
                    <p>{"Sistem kemitraan yang mudah, terarah, dan didampingi sampai sukses."}</p>
                    <ul>
                        <li>{"✓ Sistem onboarding jelas"}</li>
                        <li>{"✓ Produk teruji & repeat order tinggi"}</li>
                        <li>{"✓ Training & SOP operasional"}</li>
                        <li>{"✓ Promosi & materi pemasaran siap pakai"}</li>
                    </ul>
                </div>
            </section>

            <section id="benefits" class="benefits">
                <h2>{"Kenapa Harus Kemitraan DRW Beauty Center?"}</h2>
                <div class="benefits-grid">
                    <div class="benefit-card">
                        <h3>{"Brand terpercaya 10+ tahun"}</h3>
                        <p>{"Reputasi kuat dan komunitas pelanggan loyal di banyak kota."}</p>
                    </div>
                    <div class="benefit-card">
                        <h3>{"Produk dermatology tested"}</h3>
                        <p>{"Repeat order tinggi, formulasi aman & terdaftar BPOM."}</p>
                    </div>
                    <div class="benefit-card">
                        <h3>{"Training & support langsung"}</h3>
                        <p>{"Onboarding, SOP, dan pendampingan operasional harian."}</p>
                    </div>
                    <div class="benefit-card">
                        <h3>{"Marketing kit siap pakai"}</h3>
                        <p>{"Desain promosi, konten, dan campaign terintegrasi."}</p>
                    </div>
                    <div class="benefit-card">
                        <h3>{"Potensi omzet besar"}</h3>
                        <p>{"Skalakan pendapatan hingga ratusan juta per bulan."}</p>
                    </div>
                    <div class="benefit-card">
                        <h3>{"Legalitas & keamanan"}</h3>
                        <p>{"Perizinan jelas, tata kelola kemitraan transparan."}</p>
                    </div>
                </div>
            </section>

            <section id="showcase" class="showcase">
                <h2>{"Sudah Ratusan Mitra Bergabung"}</h2>
                <div class="showcase-grid">
                    {
                        for (1..=10).map(|i| html! {
                            <img
                                src={format!("/showcase/{i}.png")}
                                alt={format!("Mitra DRW Beauty Center {i}")}
                                loading="lazy"
                            />
                        })
                    }
                </div>
                <blockquote>
                    {"\"Dulu saya hanya reseller, sekarang punya Beauty Center sendiri dengan penghasilan stabil. Pendampingan DRW itu nyata dan sistematis.\""}
                </blockquote>
            </section>

            <section id="packages" class="packages">
                <h2>{"Pilih Paket Sesuai Target Bisnismu"}</h2>
                <div class="packages-grid">
                    <div class="package-card">
                        <div class="package-header">
                            <h3>{"PLATINUM"}</h3>
                            <span class="package-price">{"49 juta"}</span>
                        </div>
                        <p class="package-description">
                            {"Kemitraan Beauty Center yang Fokus pada tindakan facial dasar dan sudah dilengkapi alat canggih standar rumah cantik"}
                        </p>
                        <div class="package-contents">
                            <h4>{"SUDAH TERMASUK:"}</h4>
                            <p class="package-group">{"Alat Treatment Canggih:"}</p>
                            <ul>
                                <li>{"Alat 8 in 1: Microdermabrasi, High Frequency, Detox, Oxy spray, Vacuum"}</li>
                                <li>{"Alat PDT Biolight, Ice Globe, Alat Vapozone, Alat Scrubber"}</li>
                            </ul>
                            <p class="package-group">{"Perlengkapan Beauty Center DRW Skincare:"}</p>
                            <ul>
                                <li>{"Bed Facial Stainless, Display Hambalan, Seragam, Kemben, Handuk Facial"}</li>
                                <li>{"Magnifying Lamp, Trolly, Stool Chair, Tripod + Ring Light (Live), Display Acrylic"}</li>
                                <li>{"Bandana, Sertifikat"}</li>
                            </ul>
                            <p class="package-group">{"Produk Skincare:"}</p>
                            <ul>
                                <li>{"5 Paket Glow Series, 5 Paket Dark Spot/Flek Series, 5 Paket Acne Series"}</li>
                            </ul>
                            <p class="package-group excluded">{"TIDAK TERMASUK:"}</p>
                            <ul>
                                <li>{"Manajemen Fee Per Tahun 4,5 juta"}</li>
                                <li>{"Deposit selama 2 tahun kerja sama"}</li>
                            </ul>
                        </div>
                        <button class="package-cta" onclick={select_platinum}>
                            {"Minta Proposal Lengkap"}
                        </button>
                    </div>
                    <div class="package-card">
                        <div class="package-header">
                            <h3>{"PROFESIONAL"}</h3>
                            <span class="package-price">{"99 juta"}</span>
                        </div>
                        <p class="package-description">
                            {"Kemitraan Beauty Center yang dilengkapi dengan mesin IPL dan Skin Analyzed"}
                        </p>
                        <div class="package-contents">
                            <h4>{"SUDAH TERMASUK:"}</h4>
                            <p class="package-group">{"Alat Treatment Canggih:"}</p>
                            <ul>
                                <li>{"Alat 7 in 1: Oxy Spray, Hydra peel, Detox, Radio Frequency Mata, Radio Frequency Wajah, Cooling Wajah"}</li>
                                <li>{"Biolight Topeng, Alat IPL, Alat Skin analyzer, Alat PDT, Alat Vapozone, Alat Scrubber"}</li>
                            </ul>
                            <p class="package-group">{"Perlengkapan Beauty Center Skincare:"}</p>
                            <ul>
                                <li>{"Bed Facial Stainless, Seragam, Kemben, Handuk Facial, Bandana, Sertifikat"}</li>
                                <li>{"Magnifying Lamp, Trolly, Stool Chair, Display Acrylic, Display Hambalan"}</li>
                            </ul>
                            <p class="package-group">{"Produk Skincare:"}</p>
                            <ul>
                                <li>{"5 Paket Glow Series, 5 Paket Dark Spot/Flek Series, 5 Paket Acne Series"}</li>
                            </ul>
                            <p class="package-group excluded">{"TIDAK TERMASUK:"}</p>
                            <ul>
                                <li>{"Manajemen Fee Per Tahun 9 juta"}</li>
                                <li>{"Deposit selama 2 tahun kerja sama"}</li>
                            </ul>
                        </div>
                        <button class="package-cta" onclick={select_profesional}>
                            {"Minta Proposal Lengkap"}
                        </button>
                    </div>
                </div>
            </section>

            <section class="support-band">
                <h2>{"Bukan Sekadar Kemitraan — Kami Dampingi Sampai Sukses"}</h2>
                <div class="support-grid">
                    <div class="support-item">{"Pendampingan grand opening"}</div>
                    <div class="support-item">{"Training staf & dokter"}</div>
                    <div class="support-item">{"Materi promosi siap pakai"}</div>
                    <div class="support-item">{"Event & kolaborasi pusat"}</div>
                    <div class="support-item">{"Sistem CRM pelanggan"}</div>
                </div>
                <button class="support-cta" onclick={cta_scroll}>
                    {"Isi Form & Konsultasi Gratis"}
                </button>
            </section>

            <section id="faq" class="faq-section">
                <h2>{"Pertanyaan yang Sering Ditanyakan"}</h2>
                <FaqItem number={1} question="Apakah saya harus punya pengalaman di bidang kecantikan?">
                    <p>{"Tidak. DRW menyediakan training lengkap, SOP, dan pendampingan operasional."}</p>
                </FaqItem>
                <FaqItem number={2} question="Apakah legal dan aman?">
                    <p>{"Ya. Produk terdaftar BPOM dan perizinan kemitraan jelas serta transparan."}</p>
                </FaqItem>
                <FaqItem number={3} question="Bagaimana cara memulai?">
                    <p>{"Isi form di bawah. Tim kami akan menghubungi untuk konsultasi gratis dan pengiriman proposal."}</p>
                </FaqItem>
            </section>

            <LeadForm
                tier={*selected_tier}
                on_tier_change={on_tier_change}
                attribution={(*attribution).clone()}
            />

            <footer class="site-footer">
                <div class="footer-content">
                    <div class="footer-brand">
                        <span class="nav-logo-badge">{"DRW"}</span>
                        <div>
                            <div class="footer-brand-name">{"DRW Skincare"}</div>
                            <div class="footer-brand-tagline">{"Beauty Center Partnership Program"}</div>
                        </div>
                    </div>
                    <div class="footer-links">
                        <a href="#">{"Kebijakan Privasi"}</a>
                        <a href="#">{"Syarat & Ketentuan"}</a>
                        <a href="#">{"Kontak"}</a>
                    </div>
                </div>
                <div class="footer-copyright">
                    {format!("© {year} DRW Skincare. All rights reserved.")}
                </div>
            </footer>

            <ChatWidget />

            <style>
                {r#"
                .landing-page {
                    min-height: 100vh;
                    background: white;
                    color: #0f172a;
                    font-family: 'Segoe UI', system-ui, sans-serif;
                }

                .landing-page h1,
                .landing-page h2,
                .landing-page h3 {
                    line-height: 1.2;
                }

                .landing-page section {
                    max-width: 72rem;
                    margin: 0 auto;
                    padding: 3.5rem 1rem;
                }

                /* navbar */

                .top-nav {
                    position: sticky;
                    top: 0;
                    z-index: 40;
                    background: rgba(255, 255, 255, 0.85);
                    backdrop-filter: blur(8px);
                    border-bottom: 1px solid #f1f5f9;
                }

                .nav-content {
                    max-width: 72rem;
                    margin: 0 auto;
                    padding: 0.75rem 1rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    gap: 1rem;
                }

                .nav-brand {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    font-weight: 600;
                }

                .nav-logo-badge {
                    width: 36px;
                    height: 36px;
                    border-radius: 12px;
                    background: #be185d;
                    color: white;
                    font-size: 0.75rem;
                    font-weight: 700;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }

                .nav-links {
                    display: none;
                    gap: 1.5rem;
                    font-size: 0.875rem;
                }

                .nav-links a {
                    color: inherit;
                    text-decoration: none;
                }

                .nav-links a:hover {
                    color: #be185d;
                }

                @media (min-width: 768px) {
                    .nav-links {
                        display: flex;
                    }
                }

                .nav-cta {
                    border: none;
                    border-radius: 12px;
                    background: #be185d;
                    color: white;
                    font-size: 0.875rem;
                    font-weight: 600;
                    padding: 0.5rem 1rem;
                    cursor: pointer;
                    box-shadow: 0 2px 8px rgba(190, 24, 93, 0.3);
                }

                .nav-cta:hover {
                    background: #9d174d;
                }

                /* hero */

                .hero {
                    background: linear-gradient(to bottom, #fdf2f8, white);
                }

                .hero-grid {
                    display: grid;
                    gap: 2.5rem;
                    align-items: center;
                }

                @media (min-width: 768px) {
                    .hero-grid {
                        grid-template-columns: 1fr 1fr;
                    }
                }

                .hero-copy h1 {
                    font-size: 2rem;
                    font-weight: 800;
                }

                @media (min-width: 768px) {
                    .hero-copy h1 {
                        font-size: 3rem;
                    }
                }

                .hero-accent {
                    color: #be185d;
                }

                .hero-copy p {
                    margin-top: 1rem;
                    color: #475569;
                    font-size: 1.125rem;
                }

                .hero-cta-group {
                    margin-top: 1.5rem;
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.75rem;
                }

                .hero-cta {
                    border: none;
                    border-radius: 16px;
                    background: #be185d;
                    color: white;
                    font-weight: 600;
                    padding: 0.75rem 1.5rem;
                    cursor: pointer;
                    box-shadow: 0 10px 25px rgba(190, 24, 93, 0.35);
                    transition: transform 0.2s ease;
                }

                .hero-cta:hover {
                    transform: translateY(-2px);
                }

                .hero-secondary {
                    border: 1px solid #e2e8f0;
                    border-radius: 16px;
                    color: inherit;
                    font-weight: 600;
                    padding: 0.75rem 1.5rem;
                    text-decoration: none;
                }

                .hero-secondary:hover {
                    background: #f8fafc;
                }

                .hero-trust {
                    margin-top: 1.5rem;
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1.5rem;
                    font-size: 0.875rem;
                    color: #475569;
                }

                .hero-trust span::before {
                    content: "";
                    display: inline-block;
                    width: 8px;
                    height: 8px;
                    margin-right: 0.5rem;
                    border-radius: 50%;
                    background: #22c55e;
                }

                .hero-visual img {
                    width: 100%;
                    aspect-ratio: 4 / 3;
                    object-fit: cover;
                    border-radius: 24px;
                    box-shadow: inset 0 2px 8px rgba(0, 0, 0, 0.08);
                }

                /* problem -> solution */

                .problem-solution {
                    display: grid;
                    gap: 2.5rem;
                }

                @media (min-width: 768px) {
                    .problem-solution {
                        grid-template-columns: 1fr 1fr;
                    }
                }

                .problem-card,
                .solution-card {
                    border-radius: 24px;
                    padding: 2rem;
                }

                .problem-card {
                    border: 1px solid #f1f5f9;
                    box-shadow: 0 1px 3px rgba(0, 0, 0, 0.05);
                }

                .solution-card {
                    background: #be185d;
                    color: white;
                    box-shadow: 0 10px 25px rgba(190, 24, 93, 0.35);
                }

                .problem-card ul,
                .solution-card ul {
                    list-style: none;
                    margin: 1.25rem 0 0;
                    padding: 0;
                }

                .problem-card li,
                .solution-card li {
                    margin-top: 0.75rem;
                }

                .problem-card li {
                    color: #475569;
                }

                /* benefits */

                .benefits h2,
                .showcase h2,
                .packages h2,
                .faq-section h2 {
                    font-size: 1.75rem;
                    font-weight: 800;
                }

                .benefits-grid {
                    margin-top: 2rem;
                    display: grid;
                    gap: 1.5rem;
                }

                @media (min-width: 768px) {
                    .benefits-grid {
                        grid-template-columns: repeat(3, 1fr);
                    }
                }

                .benefit-card {
                    border: 1px solid #f1f5f9;
                    border-radius: 24px;
                    padding: 1.5rem;
                    box-shadow: 0 1px 3px rgba(0, 0, 0, 0.05);
                    transition: box-shadow 0.2s ease;
                }

                .benefit-card:hover {
                    box-shadow: 0 6px 16px rgba(0, 0, 0, 0.08);
                }

                .benefit-card h3 {
                    font-size: 1rem;
                    font-weight: 600;
                }

                .benefit-card p {
                    margin-top: 0.5rem;
                    font-size: 0.875rem;
                    color: #475569;
                }

                /* showcase */

                .showcase-grid {
                    margin-top: 2rem;
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 1rem;
                }

                @media (min-width: 768px) {
                    .showcase-grid {
                        grid-template-columns: repeat(5, 1fr);
                    }
                }

                .showcase-grid img {
                    width: 100%;
                    aspect-ratio: 4 / 3;
                    object-fit: cover;
                    border-radius: 16px;
                }

                .showcase blockquote {
                    margin: 1.5rem 0 0;
                    border: 1px solid #f1f5f9;
                    border-radius: 16px;
                    padding: 1.5rem;
                    color: #334155;
                    font-style: italic;
                }

                /* packages */

                .packages-grid {
                    margin-top: 2rem;
                    display: grid;
                    gap: 2rem;
                }

                @media (min-width: 768px) {
                    .packages-grid {
                        grid-template-columns: 1fr 1fr;
                    }
                }

                .package-card {
                    border: 1px solid #f1f5f9;
                    border-radius: 24px;
                    padding: 1.5rem;
                    background: linear-gradient(to bottom right, #fdf2f8, white);
                    box-shadow: 0 1px 3px rgba(0, 0, 0, 0.05);
                    display: flex;
                    flex-direction: column;
                }

                .package-header {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    margin-bottom: 1rem;
                }

                .package-header h3 {
                    font-size: 1.25rem;
                    font-weight: 700;
                    color: #9d174d;
                }

                .package-price {
                    background: #be185d;
                    color: white;
                    font-size: 1.125rem;
                    font-weight: 700;
                    padding: 0.5rem 1rem;
                    border-radius: 999px;
                }

                .package-description {
                    font-size: 0.875rem;
                    color: #475569;
                    font-style: italic;
                    margin-bottom: 1rem;
                }

                .package-contents {
                    background: white;
                    border-radius: 16px;
                    padding: 1rem;
                    box-shadow: inset 0 2px 6px rgba(0, 0, 0, 0.06);
                    font-size: 0.875rem;
                    color: #334155;
                    max-height: 24rem;
                    overflow-y: auto;
                    flex: 1;
                }

                .package-contents h4 {
                    margin: 0 0 0.75rem;
                    color: #be185d;
                }

                .package-group {
                    margin: 0.75rem 0 0.25rem;
                    font-weight: 600;
                    color: #be185d;
                }

                .package-group.excluded {
                    color: #dc2626;
                }

                .package-contents ul {
                    margin: 0;
                    padding-left: 1.25rem;
                }

                .package-contents li {
                    margin-top: 0.25rem;
                }

                .package-cta {
                    margin-top: 1.5rem;
                    width: 100%;
                    border: none;
                    border-radius: 12px;
                    background: #be185d;
                    color: white;
                    font-weight: 600;
                    padding: 0.75rem;
                    cursor: pointer;
                    transition: background 0.2s ease;
                }

                .package-cta:hover {
                    background: #9d174d;
                }

                /* support band */

                .support-band {
                    border-radius: 24px;
                    background: linear-gradient(to bottom right, #be185d, #4338ca);
                    color: white;
                    padding: 2rem;
                }

                .support-band h2 {
                    font-size: 1.75rem;
                    font-weight: 800;
                }

                .support-grid {
                    margin-top: 1.5rem;
                    display: grid;
                    gap: 1rem;
                    font-size: 0.875rem;
                }

                @media (min-width: 768px) {
                    .support-grid {
                        grid-template-columns: repeat(5, 1fr);
                    }
                }

                .support-item {
                    background: rgba(255, 255, 255, 0.1);
                    border-radius: 12px;
                    padding: 1rem;
                }

                .support-cta {
                    margin-top: 1.5rem;
                    border: none;
                    border-radius: 12px;
                    background: white;
                    color: #9d174d;
                    font-weight: 600;
                    padding: 0.75rem 1.25rem;
                    cursor: pointer;
                }

                .support-cta:hover {
                    background: #fdf2f8;
                }

                /* faq */

                .faq-item {
                    border: 1px solid #f1f5f9;
                    border-bottom: none;
                }

                .faq-item:first-of-type {
                    margin-top: 1.5rem;
                    border-radius: 16px 16px 0 0;
                }

                .faq-item:last-of-type {
                    border-bottom: 1px solid #f1f5f9;
                    border-radius: 0 0 16px 16px;
                }

                .faq-question {
                    width: 100%;
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    border: none;
                    background: none;
                    font: inherit;
                    font-weight: 600;
                    text-align: left;
                    padding: 1.25rem 1.5rem;
                    cursor: pointer;
                }

                .faq-question:hover {
                    background: #f8fafc;
                }

                .question-number {
                    flex-shrink: 0;
                    width: 20px;
                    height: 20px;
                    border-radius: 50%;
                    background: #fce7f3;
                    color: #be185d;
                    font-size: 0.75rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }

                .question-text {
                    flex: 1;
                }

                .faq-answer {
                    display: none;
                    padding: 0 1.5rem 1.5rem;
                    color: #475569;
                }

                .faq-item.open .faq-answer {
                    display: block;
                }

                /* lead form */

                .lead-form-grid {
                    display: grid;
                    gap: 2.5rem;
                    align-items: center;
                }

                @media (min-width: 768px) {
                    .lead-form-grid {
                        grid-template-columns: 1fr 1fr;
                    }
                }

                .lead-form-intro h2 {
                    font-size: 1.75rem;
                    font-weight: 800;
                }

                .lead-form-intro p {
                    margin-top: 0.75rem;
                    color: #475569;
                }

                .lead-form-intro ul {
                    list-style: none;
                    margin: 1.5rem 0 0;
                    padding: 0;
                    font-size: 0.875rem;
                    color: #475569;
                }

                .lead-form-intro li {
                    margin-top: 0.5rem;
                }

                .lead-form {
                    border: 1px solid #f1f5f9;
                    border-radius: 24px;
                    padding: 1.5rem;
                    box-shadow: 0 1px 3px rgba(0, 0, 0, 0.05);
                    display: grid;
                    gap: 1rem;
                }

                .form-field label {
                    display: block;
                    font-size: 0.875rem;
                    font-weight: 500;
                }

                .form-field input,
                .form-field select {
                    margin-top: 0.25rem;
                    width: 100%;
                    border: 1px solid #e2e8f0;
                    border-radius: 12px;
                    padding: 0.75rem 1rem;
                    font: inherit;
                    outline: none;
                    box-sizing: border-box;
                }

                .form-field input:focus,
                .form-field select:focus {
                    border-color: #f9a8d4;
                    box-shadow: 0 0 0 2px #fbcfe8;
                }

                .form-consent {
                    display: flex;
                    align-items: flex-start;
                    gap: 0.75rem;
                    font-size: 0.875rem;
                }

                .form-consent input {
                    margin-top: 0.25rem;
                }

                .form-error {
                    background: #fef2f2;
                    color: #b91c1c;
                    border-radius: 12px;
                    padding: 0.75rem 1rem;
                    font-size: 0.875rem;
                }

                .form-submit {
                    border: none;
                    border-radius: 16px;
                    background: #be185d;
                    color: white;
                    font-weight: 600;
                    padding: 0.75rem 1.5rem;
                    cursor: pointer;
                    box-shadow: 0 10px 25px rgba(190, 24, 93, 0.35);
                }

                .form-submit:hover {
                    background: #9d174d;
                }

                .form-footnote {
                    margin: 0;
                    font-size: 0.75rem;
                    color: #64748b;
                }

                /* footer */

                .site-footer {
                    border-top: 1px solid #f1f5f9;
                    padding: 2.5rem 1rem;
                    max-width: 72rem;
                    margin: 0 auto;
                    font-size: 0.875rem;
                    color: #475569;
                }

                .footer-content {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }

                @media (min-width: 768px) {
                    .footer-content {
                        flex-direction: row;
                        align-items: center;
                        justify-content: space-between;
                    }
                }

                .footer-brand {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                }

                .footer-brand-name {
                    font-weight: 600;
                    color: #1e293b;
                }

                .footer-brand-tagline {
                    font-size: 0.75rem;
                }

                .footer-links {
                    display: flex;
                    gap: 1.5rem;
                }

                .footer-links a {
                    color: inherit;
                    text-decoration: none;
                }

                .footer-links a:hover {
                    color: #be185d;
                }

                .footer-copyright {
                    margin-top: 1.5rem;
                    font-size: 0.75rem;
                }
                "#}
            </style>
        </div>
    }
}
