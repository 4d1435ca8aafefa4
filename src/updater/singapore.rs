// 🇸🇬 Singapore Knowledge Base - MAS tokenization framework
//
// PSA 2019 covers digital payment tokens (DPT); security tokens fall under
// the SFA. Penalty amounts follow PSA 2019 and should be rechecked against
// the current statute when this table is revised.

use crate::entities::{
    ConsultationPaper, CountryRecord, LegalFrameworkItem, Regulation, Source, Whitepaper,
};

/// Record schema version written by the comprehensive updater
pub const DATA_VERSION: &str = "2.0";

const OVERVIEW: &str = "Singapore has established a comprehensive and progressive regulatory framework \
for tokenization through the Monetary Authority of Singapore (MAS). The Payment \
Services Act (PSA) 2019 regulates digital payment tokens, while securities tokens \
fall under the Securities and Futures Act (SFA). MAS has issued extensive guidelines, \
consultation papers, and whitepapers to provide clarity on tokenization, including \
the Project Guardian initiative for asset tokenization and DeFi applications.";

/// Structured sections for "SG". Freshness fields are left unset.
pub fn knowledge_base() -> CountryRecord {
    CountryRecord {
        overview: Some(OVERVIEW.to_string()),
        regulations: Some(regulations()),
        requirements: Some(strings(&REQUIREMENTS)),
        authorities: Some(strings(&AUTHORITIES)),
        sources: Some(sources()),
        whitepapers: Some(whitepapers()),
        consultation_papers: Some(consultation_papers()),
        legal_framework: Some(legal_framework()),
        ..Default::default()
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn regulations() -> Vec<Regulation> {
    vec![
        Regulation::new(
            "Payment Services Act (PSA) 2019",
            "Comprehensive framework governing digital payment token (DPT) services including exchanges, wallet providers, and payment token issuers. Requires licensing for DPT service providers.",
        )
        .effective("2020-01-28")
        .reference("Act 2 of 2019"),
        Regulation::new(
            "Securities and Futures Act (SFA)",
            "Applies to tokens that constitute capital markets products, including securities or derivatives. Governs the offer, sale, and trading of security tokens.",
        )
        .reference("Chapter 289"),
        Regulation::new(
            "MAS Notice PSN01 on Prevention of Money Laundering and Countering the Financing of Terrorism",
            "Specific AML/CFT requirements for digital payment token service providers under the PSA",
        )
        .effective("2020-01-28"),
        Regulation::new(
            "MAS Guidelines on Digital Token Offerings",
            "Provides guidance on the application of securities laws to digital token offerings, including the framework for determining if a token is a capital markets product",
        )
        .published("2017-11-14")
        .updated("2020-01-07"),
        Regulation::new(
            "Variable Capital Companies Act 2018",
            "Enables tokenization of investment funds through Variable Capital Companies (VCCs) structure, facilitating digital asset funds",
        )
        .effective("2020-01-14"),
    ]
}

fn whitepapers() -> Vec<Whitepaper> {
    vec![
        Whitepaper::new(
            "Project Guardian: An Open and Interoperable Ecosystem for Digital Assets",
            "Industry collaboration to test the feasibility of asset tokenization and DeFi applications in wholesale funding markets, exploring institutional DeFi",
            "2022-11",
        )
        .url("https://www.mas.gov.sg/schemes-and-initiatives/project-guardian")
        .topics(&["Asset tokenization", "DeFi", "Institutional adoption", "Interoperability"]),
        Whitepaper::new(
            "Project Orchid: Retail CBDC",
            "Exploration of a purpose-bound digital Singapore dollar for retail use, examining the technical and policy considerations",
            "2023-10",
        )
        .topics(&["Central Bank Digital Currency", "Retail payments", "Digital SGD"]),
        Whitepaper::new(
            "Project Ubin Phase 5: Enabling Broad Ecosystem Opportunities",
            "Industry collaboration exploring blockchain-based multi-currency payments and settlements, demonstrating delivery versus payment settlement for tokenized assets",
            "2020-07",
        )
        .topics(&["Wholesale CBDC", "Cross-border payments", "DvP settlement", "Tokenized securities"]),
        Whitepaper::new(
            "Stablecoin Regulatory Framework",
            "MAS framework for regulating stablecoins, distinguishing between single-currency and multi-currency pegged stablecoins",
            "2023-08",
        )
        .topics(&["Stablecoins", "Reserve requirements", "Redemption rights", "Regulatory framework"]),
    ]
}

fn consultation_papers() -> Vec<ConsultationPaper> {
    vec![
        ConsultationPaper::new(
            "Proposed Regulatory Approach for Stablecoin-related Activities",
            "Consultation on regulatory framework for stablecoin issuance and reserve management, capital and liquidity requirements",
            "2022-10-26",
        )
        .period("2022-10-26 to 2022-12-21")
        .status("Framework implemented in 2023"),
        ConsultationPaper::new(
            "Consultation Paper on Proposed Amendments to the Payment Services Act",
            "Proposed enhancements to PSA framework including expanded scope and strengthened consumer protection measures",
            "2024-08",
        )
        .proposals(&[
            "Expanded licensing regime",
            "Enhanced consumer protection",
            "Strengthened AML/CFT measures",
            "Technology risk management requirements",
        ]),
        ConsultationPaper::new(
            "Consultation on Financial Services and Markets Bill",
            "Comprehensive reform of financial services regulatory framework, including provisions affecting digital assets",
            "2021-11",
        )
        .status("Bill passed in 2022"),
    ]
}

fn legal_framework() -> Vec<LegalFrameworkItem> {
    vec![
        LegalFrameworkItem::new(
            "Payment Services Act 2019",
            "Act 2 of 2019",
            &[
                "Part 2: Licensing of payment service providers (including DPT services)",
                "Section 5: Digital payment token service defined",
                "Section 6: Licensing requirements for DPT service providers",
                "Part 5: Business conduct requirements",
                "Part 6: Technology risk management requirements",
            ],
        )
        .penalties("Up to SGD 125,000 fine and/or 3 years imprisonment for operating without a license"),
        LegalFrameworkItem::new(
            "Securities and Futures Act",
            "Chapter 289",
            &[
                "Section 239: Definition of capital markets products",
                "Section 286-287: Prohibition on false trading and market manipulation",
                "Part XIII: Offers of investments (prospectus requirements)",
                "First Schedule: Specified securities (includes digital tokens meeting criteria)",
            ],
        )
        .penalties("Civil and criminal penalties for unlicensed activities and market misconduct"),
        LegalFrameworkItem::new(
            "Financial Services and Markets Act 2022",
            "Act 29 of 2022",
            &[
                "Consolidated framework for financial services regulation",
                "Enhanced powers for MAS oversight",
                "Technology risk management requirements",
                "Consumer protection measures for digital assets",
            ],
        )
        .effective("Phased implementation from 2023"),
    ]
}

const REQUIREMENTS: [&str; 10] = [
    "License required under PSA for operating digital payment token services (exchange, transfer, custodian services)",
    "Capital requirements: Minimum base capital of SGD 250,000 for DPT services",
    "AML/CFT compliance mandatory under PSA Notice PSN01 including customer due diligence, transaction monitoring, and suspicious transaction reporting",
    "Technology risk management standards per MAS TRM Guidelines including cybersecurity, data protection, business continuity",
    "Safeguarding of customer assets: Segregation of customer DPT and monies from company assets",
    "Consumer protection measures including disclosure requirements, complaint handling procedures",
    "Audit requirements: Annual statutory audit and submission to MAS",
    "For security tokens: Compliance with SFA prospectus requirements or exemptions",
    "Stablecoin issuers: Reserve backing, redemption rights, transparency requirements (if regulated as DPT)",
    "Corporate governance: Fit and proper criteria for officers, key personnel",
];

const AUTHORITIES: [&str; 3] = [
    "Monetary Authority of Singapore (MAS) - Primary regulator for payment services and securities",
    "Accounting and Corporate Regulatory Authority (ACRA) - Company registration and compliance",
    "Singapore Police Force - Commercial Affairs Department (CAD) - Financial crime enforcement",
];

fn sources() -> Vec<Source> {
    vec![
        Source::new("MAS Payment Services", "https://www.mas.gov.sg/regulation/payments", "Regulatory Portal"),
        Source::new(
            "MAS Digital Assets",
            "https://www.mas.gov.sg/regulation/fintech/digital-assets",
            "Regulatory Portal",
        ),
        Source::new("Payment Services Act 2019", "https://sso.agc.gov.sg/Act/PSA2019", "Legislation"),
        Source::new("Securities and Futures Act", "https://sso.agc.gov.sg/Act/SFA2001", "Legislation"),
        Source::new(
            "Project Guardian",
            "https://www.mas.gov.sg/schemes-and-initiatives/project-guardian",
            "Initiative",
        ),
        Source::new(
            "MAS Guidelines on Digital Token Offerings",
            "https://www.mas.gov.sg/regulation/securities-futures-and-fund-management",
            "Guidelines",
        ),
        Source::new("Singapore Statutes Online", "https://sso.agc.gov.sg/", "Legal Database"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_knowledge_base_section_counts() {
        let record = knowledge_base();

        assert_eq!(record.regulations().len(), 5);
        assert_eq!(record.whitepapers().len(), 4);
        assert_eq!(record.consultation_papers().len(), 3);
        assert_eq!(record.legal_framework().len(), 3);
        assert_eq!(record.requirements().len(), 10);
        assert_eq!(record.authorities().len(), 3);
        assert_eq!(record.sources().len(), 7);
        assert!(record.is_comprehensive());
    }

    #[test]
    fn test_knowledge_base_has_no_freshness_fields() {
        let record = knowledge_base();

        assert_eq!(record.last_updated, None);
        assert_eq!(record.auto_fetched, None);
        assert_eq!(record.data_version, None);
        assert!(record.extra.is_empty());
    }

    #[test]
    fn test_psa_entry_is_first() {
        let record = knowledge_base();
        let psa = &record.regulations()[0];

        assert_eq!(psa.title.as_deref(), Some("Payment Services Act (PSA) 2019"));
        assert_eq!(psa.effective_date.as_deref(), Some("2020-01-28"));
        assert_eq!(psa.reference.as_deref(), Some("Act 2 of 2019"));
    }

    #[test]
    fn test_optional_fields_follow_source_material() {
        let record = knowledge_base();

        // Project Orchid has no public URL
        assert_eq!(record.whitepapers()[1].url, None);
        // FSMA 2022 is phased in and carries no penalty line
        assert_eq!(record.legal_framework()[2].penalties, None);
        assert_eq!(
            record.consultation_papers()[1].key_proposals.as_ref().map(|p| p.len()),
            Some(4)
        );
    }
}
