//! The fixed GTCI 2023 / 2025 comparison dataset for Brunei Darussalam.

use crate::catalog::Catalog;
use crate::error::CatalogError;
use crate::model::{
    IndexHeadline, IndicatorRecord, IndicatorRef, Lineage, PillarRollup, SubpillarRollup,
};

/// Overall GTCI result: rank 41 / 51.74 in 2023, rank 43 / 51.48 in 2025.
pub const HEADLINE: IndexHeadline = IndexHeadline {
    score_2023: 51.74,
    rank_2023: 41,
    score_2025: 51.48,
    rank_2025: 43,
};

/// Build the builtin catalog. Fails only if the table below is edited into an
/// invalid state.
pub fn gtci_2023_2025() -> Result<Catalog, CatalogError> {
    Catalog::new(indicator_records(), pillar_rollups(), Some(HEADLINE))
}

pub fn pillar_rollups() -> Vec<PillarRollup> {
    vec![
        pillar("1", "Enable", (49.43, 51), (56.30, 43), vec![
            sub("1.1", "Regulatory Landscape", (76.88, 19), (80.43, 15)),
            sub("1.2", "Market Landscape", (37.98, 86), (45.38, 82)),
            sub("1.3", "Business and Labour Landscape", (33.42, 112), (43.08, 92)),
        ]),
        pillar("2", "Attract", (53.71, 54), (56.08, 46), vec![
            sub("2.1", "External Openness", (59.83, 30), (53.04, 37)),
            sub("2.2", "Internal Openness", (47.59, 99), (59.12, 87)),
        ]),
        pillar("3", "Grow", (44.35, 46), (39.88, 55), vec![
            sub("3.1", "Formal Education", (39.32, 51), (30.27, 45)),
            sub("3.2", "Lifelong Learning", (30.98, 80), (31.12, 87)),
            sub("3.3", "Access to Growth Opportunities", (62.76, 29), (58.24, 44)),
        ]),
        pillar("4", "Retain", (65.15, 49), (65.49, 39), vec![
            sub("4.1", "Sustainability", (67.40, 35), (68.30, 25)),
            sub("4.2", "Lifestyle", (62.89, 64), (62.69, 60)),
        ]),
        pillar("5", "Vocational & Technical Skills", (63.32, 26), (62.18, 33), vec![
            sub("5.1", "Mid-level Skills", (61.67, 17), (61.21, 17)),
            sub("5.2", "Employability", (64.96, 42), (63.14, 59)),
        ]),
        pillar("6", "Global Knowledge Skills", (34.47, 45), (28.98, 50), vec![
            sub("6.1", "High-level Skills", (50.08, 20), (46.07, 22)),
            sub("6.2", "Talent Impact", (18.87, 91), (11.88, 106)),
        ]),
    ]
}

/// Indicator rows in display order. A recoded measure appears as two rows:
/// the superseded 2023 row and its 2025 successor.
pub fn indicator_records() -> Vec<IndicatorRecord> {
    vec![
        // Enable / 1.1 Regulatory Landscape
        row("1.1.1", "Government effectiveness", "Enable", "1.1 Regulatory Landscape", Some(79.14), Some(80.06))
            .with_metadata("World Bank, The Worldwide Governance Indicators, 2024 Update", "www.govindicators.org", "Prime Minister's Office (PMO)"),
        row("1.1.2", "Rule of law", "Enable", "1.1 Regulatory Landscape", Some(68.96), Some(73.77))
            .with_metadata("World Bank, The Worldwide Governance Indicators, 2024 Update", "www.govindicators.org", "Attorney General's Chambers (AGC)"),
        row("1.1.3", "Political stability", "Enable", "1.1 Regulatory Landscape", Some(91.56), Some(98.60))
            .with_metadata("World Bank, The Worldwide Governance Indicators, 2024 Update", "www.govindicators.org", "Internal Security Department (ISD)"),
        row("1.1.4", "Regulatory quality", "Enable", "1.1 Regulatory Landscape", Some(67.88), Some(69.28))
            .with_metadata("World Bank, The Worldwide Governance Indicators, 2024 Update", "www.govindicators.org", "Prime Minister's Office (PMO)"),
        row("1.1.5", "Corruption", "Enable", "1.1 Regulatory Landscape", None, None)
            .with_metadata("Transparency International, The Corruption Perceptions Index 2024", "www.transparency.org/research/cpi", "Anti-Corruption Bureau (ACB)"),

        // Enable / 1.2 Market Landscape
        row("1.2.1", "Extent of market dominance", "Enable", "1.2 Market Landscape", Some(30.71), Some(39.42))
            .with_metadata("World Economic Forum, Executive Opinion Survey 2025", "reports.weforum.org", "Competition Commission Brunei Darussalam (CCBD)"),
        row("1.2.2", "Domestic credit to private sector", "Enable", "1.2 Market Landscape", Some(35.42), Some(15.42))
            .with_metadata("International Monetary Fund, International Financial Statistics and World Bank, World Development Indicators", "data.worldbank.org", "Brunei Darussalam Central Bank (BDCB)"),
        row("1.2.3", "Cluster development", "Enable", "1.2 Market Landscape", Some(44.47), Some(44.29))
            .with_metadata("World Economic Forum, Executive Opinion Survey 2025", "reports.weforum.org", "Ministry of Finance and Economy (MOFE)"),
        row("1.2.4", "R&D expenditure", "Enable", "1.2 Market Landscape", Some(5.00), Some(4.29))
            .with_metadata("Global Innovation Index Database, WIPO 2025; UNESCO Institute for Statistics; Eurostat; OECD; RICYT", "data.uis.unesco.org", "Brunei Research Council (BRC)"),
        row("1.2.5", "ICT Infrastructure", "Enable", "1.2 Market Landscape", Some(0.00), None)
            .with_metadata("", "", "AITI")
            .with_lineage(replaced("Replaced by 1.2.5 Population covered by at least a 3G mobile network")),
        row("1.2.5", "Population covered by at least a 3G mobile network", "Enable", "1.2 Market Landscape", None, Some(93.09))
            .with_metadata("International Telecommunication Union, ITU DataHub", "datahub.itu.int", "AITI")
            .with_lineage(added(Some(IndicatorRef::new("1.2.5", "ICT Infrastructure")))),
        row("1.2.6", "Urbanisation", "Enable", "1.2 Market Landscape", Some(74.28), None)
            .with_metadata("World Urbanization Prospects, United Nations", "population.un.org/wup", "Dept of Town and Country Planning (TCP)")
            .with_lineage(replaced("Replaced by 1.2.7 Urbanisation")),
        row("1.2.6", "Internet access in schools", "Enable", "1.2 Market Landscape", None, None)
            .with_metadata("UNESCO Institute for Statistics, UIS.Stat", "data.uis.unesco.org", "Ministry of Education (MOE)")
            .with_lineage(added(None)),
        row("1.2.7", "Urbanisation", "Enable", "1.2 Market Landscape", None, Some(75.76))
            .with_metadata("World Urbanization Prospects, United Nations", "population.un.org/wup", "Dept of Town and Country Planning (TCP)")
            .with_lineage(code_changed(Some(IndicatorRef::new("1.2.6", "Urbanisation")))),

        // Enable / 1.3 Business and Labour Landscape
        row("1.3.1", "Labour rights", "Enable", "1.3 Business and Labour Landscape", None, Some(74.20))
            .with_metadata("International Labour Organization, ILOSTAT", "ilostat.ilo.org", "Labour Department"),
        row("1.3.2", "Labour-employer cooperation", "Enable", "1.3 Business and Labour Landscape", Some(51.20), Some(60.53))
            .with_metadata("World Economic Forum, Executive Opinion Survey 2025", "reports.weforum.org", "Labour Department"),
        row("1.3.3", "Professional management", "Enable", "1.3 Business and Labour Landscape", Some(42.44), Some(60.63))
            .with_metadata("World Economic Forum, Executive Opinion Survey 2025", "reports.weforum.org", "Darussalam Enterprise (DARe)"),
        row("1.3.4", "Relationship of pay to productivity", "Enable", "1.3 Business and Labour Landscape", Some(55.17), Some(46.51))
            .with_metadata("World Economic Forum, Executive Opinion Survey 2025", "reports.weforum.org", "Manpower Planning and Employment Council (MPEC)"),
        row("1.3.5", "Enterprise software", "Enable", "1.3 Business and Labour Landscape", Some(11.53), Some(11.86))
            .with_metadata("Statista, Technology Market Outlook; World Bank, World Development Indicators", "statista.com", "AITI"),
        row("1.3.6", "Cloud computing", "Enable", "1.3 Business and Labour Landscape", Some(6.76), Some(4.79))
            .with_metadata("Statista, Technology Market Outlook; World Bank, World Development Indicators", "statista.com", "AITI"),
        row("1.3.7", "Firms with website", "Enable", "1.3 Business and Labour Landscape", None, None)
            .with_metadata("OECD, ICT Access and Use by Businesses; World Bank, Enterprise Surveys", "enterprisesurveys.org", "AITI / DEPS"),

        // Attract / 2.1 External Openness
        row("2.1.1", "FDI regulatory restrictiveness", "Attract", "2.1 External Openness", Some(61.62), Some(54.68))
            .with_metadata("OECD, FDI Regulatory Restrictiveness Index", "www.oecd.org/investment/fdiindex.htm", "Brunei Economic Development Board (BEDB)"),
        row("2.1.2", "Financial globalisation", "Attract", "2.1 External Openness", Some(85.47), Some(78.93))
            .with_metadata("KOF Globalisation Index", "kof.ethz.ch", "Ministry of Finance and Economy (MOFE)"),
        row("2.1.3", "Migrant stock", "Attract", "2.1 External Openness", Some(78.84), Some(49.50))
            .with_metadata("United Nations Population Division, Trends in International Migrant Stock 2024", "un.org/development/desa/pd", "Immigration and National Registration Dept (INRD)"),
        row("2.1.4", "International students", "Attract", "2.1 External Openness", Some(13.39), Some(15.76))
            .with_metadata("UNESCO Institute for Statistics, UIS online database", "data.uis.unesco.org", "Ministry of Education (MOE)"),
        row("2.1.5", "Brain gain", "Attract", "2.1 External Openness", None, Some(66.32))
            .with_metadata("World Economic Forum, Executive Opinion Survey 2025", "reports.weforum.org", "MPEC"),
        row("2.1.6", "AI skills migration", "Attract", "2.1 External Openness", None, None)
            .with_metadata("OECD.AI Policy Observatory", "oecd.ai", "AITI")
            .with_lineage(added(None)),

        // Attract / 2.2 Internal Openness
        row("2.2.1", "Tolerance of minorities", "Attract", "2.2 Internal Openness", Some(30.85), Some(27.66))
            .with_metadata("The Fund for Peace, Fragile States Index 2024", "fragilestatesindex.org", "JAPEM / MORA"),
        row("2.2.2", "Tolerance of immigrants", "Attract", "2.2 Internal Openness", None, None)
            .with_metadata("Gallup World Poll", "gallup.com", "INRD"),
        row("2.2.3", "Social mobility", "Attract", "2.2 Internal Openness", Some(36.36), Some(60.68))
            .with_metadata("World Economic Forum, Executive Opinion Survey 2025", "reports.weforum.org", "JAPEM / MPEC"),
        row("2.2.4", "Economic empowerment of women", "Attract", "2.2 Internal Openness", Some(33.63), Some(53.12))
            .with_metadata("World Bank, Women, Business and the Law 2024", "wbl.worldbank.org", "JAPEM / Women's Business Council"),
        row("2.2.5", "Gender parity in high-skilled jobs", "Attract", "2.2 Internal Openness", Some(83.85), Some(82.62))
            .with_metadata("International Labour Organization, ILOSTAT", "ilostat.ilo.org", "Labour Department / DEPS"),
        row("2.2.6", "Leadership opportunities for women", "Attract", "2.2 Internal Openness", Some(53.24), Some(71.54))
            .with_metadata("World Economic Forum, Executive Opinion Survey 2025", "reports.weforum.org", "Review of Women's Status (JAPEM)"),

        // Grow / 3.1 Formal Education
        row("3.1.1", "Vocational enrolment", "Grow", "3.1 Formal Education", Some(18.17), Some(20.87))
            .with_metadata("UNESCO Institute for Statistics, UIS.Stat", "data.uis.unesco.org", "IBTE / MOE"),
        row("3.1.2", "Tertiary enrolment", "Grow", "3.1 Formal Education", Some(20.46), Some(20.55))
            .with_metadata("UNESCO Institute for Statistics, UIS online database", "data.uis.unesco.org", "MOE (Higher Education)"),
        row("3.1.3", "Tertiary education expenditure", "Grow", "3.1 Formal Education", Some(86.29), Some(50.31))
            .with_metadata("UNESCO Institute for Statistics, UIS.Stat", "data.uis.unesco.org", "MOE / MOFE"),
        row("3.1.4", "Reading, maths and science", "Grow", "3.1 Formal Education", Some(36.31), Some(42.06))
            .with_metadata("OECD, Programme for International Student Assessment (PISA)", "www.oecd.org/pisa", "MOE (PISA Unit)"),
        row("3.1.5", "University ranking", "Grow", "3.1 Formal Education", Some(35.36), Some(17.53))
            .with_metadata("QS Quacquarelli Symonds Ltd, QS World University Rankings", "www.topuniversities.com/world-university-rankings/2024", "UBD / UTB / UNISSA"),

        // Grow / 3.2 Lifelong Learning
        row("3.2.1", "Business masters education", "Grow", "3.2 Lifelong Learning", Some(0.00), Some(0.00))
            .with_metadata("Quacquarelli Symonds Ltd, QS Global MBA and Business Masters Rankings 2025", "www.topmba.com", "UBD / UTB"),
        row("3.2.2", "Prevalence of training in firms", "Grow", "3.2 Lifelong Learning", None, None)
            .with_metadata("World Bank, Enterprise Surveys", "enterprisesurveys.org", "MPEC / LLLC"),
        row("3.2.3", "Employee development", "Grow", "3.2 Lifelong Learning", Some(61.96), Some(62.24))
            .with_metadata("World Economic Forum, Executive Opinion Survey 2025", "reports.weforum.org", "MPEC"),

        // Grow / 3.3 Access to Growth Opportunities
        row("3.3.1", "Delegation of authority", "Grow", "3.3 Access to Growth Opportunities", Some(63.34), Some(65.69))
            .with_metadata("World Economic Forum, Executive Opinion Survey 2021-2022", "reports.weforum.org", "MPEC"),
        row("3.3.2", "Youth inclusion", "Grow", "3.3 Access to Growth Opportunities", Some(62.04), Some(67.31))
            .with_metadata("International Labour Organization, ILOSTAT", "ilostat.ilo.org", "Ministry of Culture, Youth and Sports (MCYS)"),
        row("3.3.3", "Use of virtual social networks", "Grow", "3.3 Access to Growth Opportunities", Some(89.20), Some(63.50))
            .with_metadata("We Are Social and Hootsuite, Digital 2025 report series", "wearesocial.com/digital-2025", "AITI"),
        row("3.3.4", "Use of virtual professional networks", "Grow", "3.3 Access to Growth Opportunities", Some(36.47), Some(36.47))
            .with_metadata("We Are Social and Hootsuite, Digital 2023 report series", "wearesocial.com/digital-2023", "AITI"),

        // Retain / 4.1 Sustainability
        row("4.1.1", "Pension coverage", "Retain", "4.1 Sustainability", Some(100.00), Some(100.00))
            .with_metadata("International Labour Organization, Social Security Inquiry (SSI); UN Global SDG Indicators Database", "unstats.un.org/sdgs/indicatorsdatabase", "TAP (Employees Trust Fund)"),
        row("4.1.2", "Social protection", "Retain", "4.1 Sustainability", Some(55.97), Some(50.00))
            .with_metadata("World Economic Forum, Executive Opinion Survey 2021-2022", "reports.weforum.org", "JAPEM (MCYS)"),
        row("4.1.3", "Brain retention", "Retain", "4.1 Sustainability", Some(42.74), Some(48.17))
            .with_metadata("World Economic Forum, Executive Opinion Survey 2025", "reports.weforum.org", "MPEC"),
        row("4.1.4", "Environmental performance", "Retain", "4.1 Sustainability", Some(45.42), Some(48.30))
            .with_metadata("Yale Center for Environmental Law & Policy, 2024 Environmental Performance Index", "epi.yale.edu", "JASTRe (Dept of Environment, Parks & Recreation)"),
        row("4.1.5", "Vulnerable employment", "Retain", "4.1 Sustainability", Some(92.87), Some(95.02))
            .with_metadata("World Bank, World Development Indicators; International Labour Organization, ILOSTAT", "data.worldbank.org", "Labour Dept / DEPS"),
        row("4.1.6", "Protect against future disasters", "Retain", "4.1 Sustainability", None, None)
            .with_metadata("Gallup Inc., World Risk Poll Resilience Index", "irfoundation.org.uk/wrp/world-risk-poll-data", "NDMC (National Disaster Management Centre)")
            .with_lineage(added(None)),
        row("4.1.7", "Household financial resilience", "Retain", "4.1 Sustainability", None, None)
            .with_metadata("Gallup Inc., World Risk Poll Resilience Index", "irfoundation.org.uk/wrp/world-risk-poll-data", "MOFE / BDCB")
            .with_lineage(added(None)),

        // Retain / 4.2 Lifestyle
        row("4.2.1", "Personal rights", "Retain", "4.2 Lifestyle", None, None)
            .with_metadata("Social Progress Imperative, The Social Progress Index 2025", "www.socialprogress.org", "AGC / PMO"),
        row("4.2.2", "Personal safety", "Retain", "4.2 Lifestyle", None, None)
            .with_metadata("Social Progress Imperative, The Social Progress Index 2025", "www.socialprogress.org", "Royal Brunei Police Force (RBPF)"),
        row("4.2.3", "Physician density", "Retain", "4.2 Lifestyle", Some(29.78), Some(27.37))
            .with_metadata("World Health Organization, Global Health Observatory", "www.who.int/data/gho", "Ministry of Health (MOH)"),
        row("4.2.4", "Sanitation", "Retain", "4.2 Lifestyle", Some(95.99), Some(98.00))
            .with_metadata("World Health Organization, Global Health Observatory", "www.who.int/data/gho", "Ministry of Development (MOD) / MOH"),
        row("4.2.5", "Employee wellbeing", "Retain", "4.2 Lifestyle", None, None)
            .with_metadata("Gallup World Poll; World Happiness Report 2025", "www.gallup.com/analytics/349487/world-happiness-report.aspx", "MOH / MPEC")
            .with_lineage(added(None)),

        // Vocational & Technical Skills / 5.1 Mid-level Skills
        row("5.1.1", "Workforce with secondary education", "Vocational & Technical Skills", "5.1 Mid-level Skills", Some(73.23), Some(62.63))
            .with_metadata("International Labour Organization, ILOSTAT", "ilostat.ilo.org", "MOE / Labour Dept"),
        row("5.1.2", "Population with secondary education", "Vocational & Technical Skills", "5.1 Mid-level Skills", None, Some(63.94))
            .with_metadata("UNESCO Institute for Statistics, UIS.Stat", "data.uis.unesco.org", "DEPS / MOE"),
        row("5.1.3", "Technicians and associate professionals", "Vocational & Technical Skills", "5.1 Mid-level Skills", Some(50.12), Some(57.06))
            .with_metadata("International Labour Organization, ILOSTAT; World Bank, Global Jobs Indicators Database (JOIN)", "ilostat.ilo.org", "Labour Dept"),
        row("5.1.4", "Labour productivity per employee", "Vocational & Technical Skills", "5.1 Mid-level Skills", None, None)
            .with_metadata("The Conference Board, Total Economy Database", "www.conference-board.org/data/economydatabase", "DEPS"),

        // Vocational & Technical Skills / 5.2 Employability
        row("5.2.1", "Ease of finding skilled employees", "Vocational & Technical Skills", "5.2 Employability", Some(44.76), Some(42.88))
            .with_metadata("World Economic Forum, Executive Opinion Survey 2025", "reports.weforum.org", "MPEC / JobCentre Brunei"),
        row("5.2.2", "Relevance of education system to the economy", "Vocational & Technical Skills", "5.2 Employability", Some(63.96), Some(60.78))
            .with_metadata("World Economic Forum, Executive Opinion Survey 2021-2022", "reports.weforum.org", "MOE / MPEC"),
        row("5.2.3", "Skills matching", "Vocational & Technical Skills", "5.2 Employability", Some(66.81), Some(65.70))
            .with_metadata("International Labour Organization, ILOSTAT", "ilostat.ilo.org", "MPEC"),
        row("5.2.4", "Highly educated unemployment", "Vocational & Technical Skills", "5.2 Employability", Some(84.32), Some(83.21))
            .with_metadata("International Labour Organization, ILOSTAT", "ilostat.ilo.org", "Labour Dept / MPEC"),

        // Global Knowledge Skills / 6.1 High-level Skills
        row("6.1.1", "Workforce with tertiary education", "Global Knowledge Skills", "6.1 High-level Skills", Some(27.70), Some(35.56))
            .with_metadata("International Labour Organization, ILOSTAT", "ilostat.ilo.org", "MOE / Labour Dept"),
        row("6.1.2", "Population with tertiary education", "Global Knowledge Skills", "6.1 High-level Skills", None, None)
            .with_metadata("UNESCO Institute for Statistics, UIS Stat", "http://data.uis.unesco.org/", "Ministry of Education")
            .with_lineage(removed("Removed")),
        row("6.1.2", "Soft skills", "Global Knowledge Skills", "6.1 High-level Skills", None, Some(57.13))
            .with_metadata("World Economic Forum, Executive Opinion Survey 2024", "reports.weforum.org", "MPEC")
            .with_lineage(added(None)),
        row("6.1.3", "Professionals", "Global Knowledge Skills", "6.1 High-level Skills", Some(34.51), Some(33.81))
            .with_metadata("International Labour Organization, ILOSTAT; World Bank, Global Jobs Indicators Database (JOIN)", "ilostat.ilo.org", "Labour Dept"),
        row("6.1.4", "Researchers", "Global Knowledge Skills", "6.1 High-level Skills", None, Some(4.82))
            .with_metadata("UNESCO Institute for Statistics; Eurostat; OECD Main Science and Technology Indicators (MSTI); RICYT", "data.uis.unesco.org", "BRC / UBD / UTB"),
        row("6.1.5", "Senior officials and managers", "Global Knowledge Skills", "6.1 High-level Skills", Some(38.10), Some(45.11))
            .with_metadata("International Labour Organization, ILOSTAT; World Bank, Global Jobs Indicators Database (JOIN)", "ilostat.ilo.org", "Labour Dept (JPA)"),
        row("6.1.6", "Digital skills", "Global Knowledge Skills", "6.1 High-level Skills", Some(100.00), Some(100.00))
            .with_metadata("International Telecommunication Union, ITU DataHub", "datahub.itu.int", "AITI"),
        row("6.1.7", "AI talent concentration", "Global Knowledge Skills", "6.1 High-level Skills", None, None)
            .with_metadata("OECD.AI Policy Observatory", "oecd.ai", "AITI")
            .with_lineage(added(None)),

        // Global Knowledge Skills / 6.2 Talent Impact
        row("6.2.1", "Innovation output", "Global Knowledge Skills", "6.2 Talent Impact", None, None)
            .with_metadata("", "", "")
            .with_lineage(replaced("Replaced by 6.2.1 ICT services exports")),
        row("6.2.1", "ICT services exports", "Global Knowledge Skills", "6.2 Talent Impact", None, Some(2.44))
            .with_metadata("World Trade Organization and United Nations Conference on Trade and Development, Trade in Commercial Services database", "stats.wto.org", "AITI / DEPS")
            .with_lineage(added(Some(IndicatorRef::new("6.2.1", "Innovation output")))),
        row("6.2.2", "Mobile apps development", "Global Knowledge Skills", "6.2 Talent Impact", None, Some(43.27))
            .with_metadata("data.ia (Sensor Tower Company); International Monetary Fund, World Economic Outlook Database", "www.data.ai", "AITI")
            .with_lineage(added(None)),
        row("6.2.3", "Intellectual property receipts", "Global Knowledge Skills", "6.2 Talent Impact", None, Some(0.00))
            .with_metadata("World Trade Organization and United Nations Conference on Trade and Development, Trade in Commercial Services database", "stats.wto.org", "BruIPO (Brunei Intellectual Property Office)")
            .with_lineage(added(None)),
        row("6.2.4", "High-value exports", "Global Knowledge Skills", "6.2 Talent Impact", Some(2.24), Some(1.53))
            .with_metadata("World Bank, World Development Indicators; United Nations Comtrade database", "data.worldbank.org", "DEPS / MOFE")
            .with_lineage(code_changed(None)),
        row("6.2.5", "Software development", "Global Knowledge Skills", "6.2 Talent Impact", Some(59.20), Some(3.02))
            .with_metadata("GitHub; United Nations, Department of Economic and Social Affairs, Population Division", "github.com", "AITI")
            .with_lineage(code_changed(None)),
        row("6.2.6", "New business density", "Global Knowledge Skills", "6.2 Talent Impact", Some(5.33), Some(0.00))
            .with_metadata("World Bank, Entrepreneurship Database", "www.worldbank.org/en/programs/entrepreneurship", "ROCBN (Registry of Companies and Business Names)")
            .with_lineage(code_changed(None)),
        row("6.2.7", "Scientific journal articles", "Global Knowledge Skills", "6.2 Talent Impact", Some(24.29), Some(32.91))
            .with_metadata("World Bank, World Development Indicators; National Science Foundation, Science and Engineering Indicators", "data.worldbank.org", "UBD / UTB / UNISSA")
            .with_lineage(code_changed(None)),
    ]
}

fn row(
    code: &str,
    name: &str,
    pillar: &str,
    subpillar: &str,
    score_2023: Option<f64>,
    score_2025: Option<f64>,
) -> IndicatorRecord {
    IndicatorRecord::new(code, name, pillar, subpillar, score_2023, score_2025)
}

fn added(predecessor: Option<IndicatorRef>) -> Lineage {
    Lineage::Added { predecessor }
}

fn code_changed(predecessor: Option<IndicatorRef>) -> Lineage {
    Lineage::CodeChanged { predecessor }
}

fn replaced(replaced_by: &str) -> Lineage {
    Lineage::Replaced { replaced_by: Some(replaced_by.into()) }
}

fn removed(note: &str) -> Lineage {
    Lineage::Removed { note: Some(note.into()) }
}

fn pillar(
    id: &str,
    name: &str,
    (score_2023, rank_2023): (f64, u32),
    (score_2025, rank_2025): (f64, u32),
    subpillars: Vec<SubpillarRollup>,
) -> PillarRollup {
    PillarRollup {
        id: id.into(),
        name: name.into(),
        score_2023,
        rank_2023,
        score_2025,
        rank_2025,
        subpillars,
    }
}

fn sub(id: &str, name: &str, (score_2023, rank_2023): (f64, u32), (score_2025, rank_2025): (f64, u32)) -> SubpillarRollup {
    SubpillarRollup {
        id: id.into(),
        name: name.into(),
        score_2023,
        rank_2023,
        score_2025,
        rank_2025,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LineageTag;

    #[test]
    fn builtin_catalog_is_valid() {
        let catalog = gtci_2023_2025().unwrap();
        assert_eq!(catalog.len(), 81);
        assert_eq!(catalog.pillars().len(), 6);
        assert_eq!(catalog.pillar_names().len(), 6);
    }

    #[test]
    fn lineage_tag_counts() {
        let catalog = gtci_2023_2025().unwrap();
        let count = |tag: LineageTag| catalog.iter().filter(|i| i.tag() == tag).count();
        assert_eq!(count(LineageTag::Unchanged), 61);
        assert_eq!(count(LineageTag::New), 11);
        assert_eq!(count(LineageTag::CodeChanged), 5);
        assert_eq!(count(LineageTag::Replaced), 3);
        assert_eq!(count(LineageTag::Removed), 1);
    }

    #[test]
    fn only_two_rows_are_2023_only() {
        let catalog = gtci_2023_2025().unwrap();
        let only: Vec<(&str, &str)> = catalog
            .iter()
            .filter(|i| i.is_2023_only)
            .map(|i| (i.code.as_str(), i.name.as_str()))
            .collect();
        assert_eq!(only, vec![("1.2.5", "ICT Infrastructure"), ("1.2.6", "Urbanisation")]);
    }

    #[test]
    fn recoded_pairs_are_linked() {
        let catalog = gtci_2023_2025().unwrap();
        let pairs: Vec<(&str, &str)> = catalog
            .recoded_pairs()
            .into_iter()
            .map(|(pred, succ)| (pred.code.as_str(), succ.code.as_str()))
            .collect();
        assert_eq!(pairs, vec![("1.2.5", "1.2.5"), ("1.2.6", "1.2.7"), ("6.2.1", "6.2.1")]);
    }

    #[test]
    fn every_subpillar_has_a_rollup() {
        let catalog = gtci_2023_2025().unwrap();
        for ind in catalog.iter() {
            let found = catalog
                .pillars()
                .iter()
                .flat_map(|p| p.subpillars.iter())
                .any(|s| s.id == ind.subpillar_id());
            assert!(found, "no rollup for {}", ind.subpillar);
        }
    }
}
