//! Terms of Service and Privacy Policy.

use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_PUBLIC;
use contracts::system::routes::LOGIN_PATH;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LegalTab {
    Terms,
    Privacy,
}

type Section = (&'static str, &'static [&'static str]);

const LAST_UPDATED: &str = "Last Updated: January 1, 2025";

static TERMS: [Section; 8] = [
    ("1. Acceptance of Terms", &[
        "By accessing or using the Pinnacle GST Analytics platform (\"Service\", \"Platform\"), you agree to be bound by these Terms of Service (\"Terms\"). If you disagree with any part of the terms, you may not access the Service. These Terms constitute a legally binding agreement between you (\"User\", \"Client\") and Pinnacle Analytics Pvt Ltd (\"Company\", \"we\", \"us\").",
    ]),
    ("2. Description of Service", &[
        "Pinnacle provides a cloud-based SaaS platform for Goods and Services Tax (GST) analytics, reconciliation, and compliance monitoring. The Service allows users to upload financial data, connect with GSTN APIs, visualize tax liabilities, and generate reports.",
        "Disclaimer: Pinnacle is an analytics tool and not a substitute for professional tax advice. While we strive for accuracy, the Company is not liable for penalties, interest, or errors resulting from the use of our generated reports for official filings.",
    ]),
    ("3. User Accounts & Security", &[
        "Registration: You must provide accurate, current, and complete information during the registration process.",
        "Credentials: You are responsible for safeguarding the password and OTPs used to access the Service. You agree not to disclose your password to any third party.",
        "GSTIN Authorization: By connecting a GSTIN, you represent that you are the authorized signatory or have explicit permission from the authorized signatory to access the tax data for that entity.",
    ]),
    ("4. Subscription & Payments", &[
        "The Service is billed on a subscription basis (\"Subscription(s)\"). You will be billed in advance on a recurring and periodic basis (such as monthly or annually).",
        "Auto-Renewal: Subscriptions automatically renew unless cancelled at least 24 hours before the end of the current period.",
        "Refunds: All fees are non-refundable except as required by law or explicitly stated in our Refund Policy.",
        "Fee Changes: We reserve the right to modify subscription fees with 30 days' notice.",
    ]),
    ("5. Intellectual Property", &[
        "The Service and its original content (excluding User Data), features, and functionality are and will remain the exclusive property of Pinnacle Analytics Pvt Ltd. The Service is protected by copyright, trademark, and other laws of both India and foreign countries.",
    ]),
    ("6. Limitation of Liability", &[
        "In no event shall Pinnacle Analytics Pvt Ltd, nor its directors, employees, partners, agents, suppliers, or affiliates, be liable for any indirect, incidental, special, consequential or punitive damages, including without limitation, loss of profits, data, use, goodwill, or other intangible losses, resulting from your access to or use of or inability to access or use the Service.",
    ]),
    ("7. Termination", &[
        "We may terminate or suspend your account immediately, without prior notice or liability, for any reason whatsoever, including without limitation if you breach the Terms. Upon termination, your right to use the Service will immediately cease.",
    ]),
    ("8. Governing Law", &[
        "These Terms shall be governed and construed in accordance with the laws of India, without regard to its conflict of law provisions. Any disputes arising shall be subject to the exclusive jurisdiction of the courts located in Mumbai, Maharashtra.",
    ]),
];

static PRIVACY: [Section; 8] = [
    ("1. Introduction", &[
        "Pinnacle Analytics Pvt Ltd (\"we,\" \"our,\" or \"us\") is committed to protecting your privacy. This Privacy Policy explains how your personal information and financial data is collected, used, and disclosed by Pinnacle.",
    ]),
    ("2. Information We Collect", &[
        "Personal Data: Full Name, Email Address, Phone Number, Business Name & Address.",
        "Financial & Tax Data: GSTIN, Purchase and Sales Registers (GSTR-1, GSTR-3B data), Authentication Tokens (API sessions with GSTN), invoice level details uploaded by you.",
    ]),
    ("3. How We Use Your Information", &[
        "Service Provision: To reconcile your invoices, calculate tax liabilities, and generate analytics dashboards.",
        "Communication: To send critical compliance alerts (e.g., filing deadlines) and administrative information.",
        "Improvement: To analyze usage trends and improve the algorithm for matching invoices. Models are trained on anonymized, aggregated data only.",
        "Security: To detect, prevent, and address technical issues and fraudulent activities.",
    ]),
    ("4. Data Security & Encryption", &[
        "Encryption at Rest: All sensitive financial data is encrypted using AES-256 standards in our databases.",
        "Encryption in Transit: All data transmission occurs over secure SSL/TLS channels.",
        "Access Control: Strict role-based access control (RBAC) ensures only authorized personnel have access to system architecture, not user data.",
    ]),
    ("5. Sharing of Information", &[
        "We do not sell your personal data. We may share information with service providers who perform services on our behalf under strict confidentiality agreements, or when required to do so by law.",
    ]),
    ("6. Data Retention", &[
        "Financial transaction data is retained for a period of 8 years as per the requirement of Indian Income Tax & GST laws, unless you request deletion of your account, in which case data is archived or deleted subject to legal mandates.",
    ]),
    ("7. Your Data Rights", &[
        "The right to access, update or delete the information we have on you.",
        "The right of rectification.",
        "The right to object.",
        "The right of restriction.",
        "The right to data portability.",
    ]),
    ("8. Contact Us", &[
        "By email: compliance@pinnaclegst.com",
        "By mail: Pinnacle Analytics Pvt Ltd, 123 Tech Park, Andheri East, Mumbai, 400093, India",
    ]),
];

fn document(title: &'static str, sections: &'static [Section]) -> impl IntoView {
    view! {
        <article class="legal__doc">
            <h2>{title}</h2>
            <p class="legal__updated">{LAST_UPDATED}</p>
            {sections
                .iter()
                .map(|(heading, paragraphs)| {
                    view! {
                        <section class="legal__section">
                            <h3>{*heading}</h3>
                            {paragraphs.iter().map(|p| view! { <p>{*p}</p> }).collect_view()}
                        </section>
                    }
                })
                .collect_view()}
        </article>
    }
}

#[component]
pub fn LegalPage() -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();
    let tab = RwSignal::new(LegalTab::Terms);

    let tab_button = move |value: LegalTab, label: &'static str| {
        view! {
            <Button
                appearance=move || if tab.get() == value { ButtonAppearance::Primary } else { ButtonAppearance::Subtle }
                class="segmented__item"
                on_click=move |_| tab.set(value)
            >
                {label}
            </Button>
        }
    };

    view! {
        <PageFrame page_id="legal--public" category=PAGE_CAT_PUBLIC>
            <div class="legal">
                <div class="legal__topbar">
                    <div class="legal__brand" on:click=move |_| ctx.navigate(LOGIN_PATH)>
                        {icon("hexagon")}
                        <span>"Pinnacle"</span>
                    </div>
                    <button class="btn-link" on:click=move |_| ctx.navigate(LOGIN_PATH)>
                        {icon("chevron-left")}
                        "Back"
                    </button>
                </div>

                <h1 class="legal__title">"Legal & Compliance"</h1>
                <div class="segmented">
                    {tab_button(LegalTab::Terms, "Terms of Service")}
                    {tab_button(LegalTab::Privacy, "Privacy Policy")}
                </div>

                {move || match tab.get() {
                    LegalTab::Terms => document("Terms of Service", &TERMS).into_any(),
                    LegalTab::Privacy => document("Privacy Policy", &PRIVACY).into_any(),
                }}

                <p class="legal__footer">"© 2025 Pinnacle GST Analytics. All rights reserved."</p>
            </div>
        </PageFrame>
    }
}
