//! Per-country `teiHeader` profiles.
//!
//! Title templates use `{term}` and `{session}` placeholders.

use chrono::NaiveDate;
use tracing::warn;

use crate::TEI_NS;
use crate::tree::Element;

/// Elements whose usage is declared in `tagsDecl`.
pub(crate) const DECLARED_TAGS: &[&str] = &[
    "text", "body", "div", "head", "note", "u", "seg", "vocal", "desc", "kinesic", "gap",
];

const CLARIN_LOCAL: &str = "Istraživačka infrastrukutra CLARIN";
const CODING_LOCAL: &str = "Kodiranje Parla-CLARIN TEI XML";
const CODING_EN: &str = "Parla-CLARIN TEI XML corpus encoding";
const DOWNLOAD_EN: &str = "Download and clean-up of the JSON digital source";
const LICENCE_URL: &str = "http://creativecommons.org/licenses/by/4.0/";
const PARLAMINT_URL: &str = "https://www.clarin.eu/content/parlamint";
const HANDLE: &str = "http://hdl.handle.net/11356/1432";
const PUBLICATION_DATE: &str = "2021-06-09";
const COMPILER: &str = "Peter Rupnik";

/// Country-specific header data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderProfile {
    /// Country code used in document identifiers (`HR`, `RS`, `BA`).
    pub country_code: &'static str,
    /// Country key in `settingDesc`.
    pub setting_key: &'static str,
    pub country_name: &'static str,
    /// Language of the local-language header strings and measures.
    pub local_language: &'static str,
    pub main_title_local: &'static str,
    pub main_title_en: &'static str,
    pub sub_title_local: &'static str,
    pub sub_title_en: &'static str,
    /// Parliament abbreviation used in `meeting/@corresp` and `@ana`.
    pub parliament: &'static str,
    /// Local description of the source download step, where one exists.
    pub download_resp_local: Option<&'static str>,
    pub source_title: &'static str,
    pub business_url: &'static str,
    pub parliament_url: &'static str,
    pub address: &'static str,
    pub city: &'static str,
    pub speeches_noun: &'static str,
    pub words_noun: &'static str,
    pub thousands_separator: char,
    /// Whether the session date range appears in `sourceDesc` and `settingDesc`.
    pub show_date_range: bool,
}

pub static CROATIAN: HeaderProfile = HeaderProfile {
    country_code: "HR",
    setting_key: "HR",
    country_name: "Croatia",
    local_language: "hr",
    main_title_local: "Hrvatski parlamentarni korpus ParlaMint-HR, Mandat {term}, Sjednica {session}[ParlaMint SAMPLE]",
    main_title_en: "Croatian parliamentary corpus ParlaMint-HR, Term {term}, Session {session} [ParlaMint SAMPLE]",
    sub_title_local: "Zapisnici sjednica Hrvatskog sabora, mandat {term}, sjednica {session}",
    sub_title_en: "Minutes of the National Assembly of the Republic of Croatia, Term {term}, Session {session}",
    parliament: "HS",
    download_resp_local: Some("Preuzimanje i čiščenje digitalnog izvora"),
    source_title: "Minutes of the National Assembly of the Republic of Croatia",
    business_url: "https://parlametar.hr/",
    parliament_url: "http://www.sabor.hr/",
    address: "Trg sv. Marka 6",
    city: "Zagreb",
    speeches_noun: "govora",
    words_noun: "riječi",
    thousands_separator: '.',
    show_date_range: false,
};

pub static SERBIAN: HeaderProfile = HeaderProfile {
    country_code: "RS",
    setting_key: "SR",
    country_name: "Serbia",
    local_language: "sr",
    main_title_local: "Srpski parlamentarni korpus ParlaMint-RS-T{term}, Zasedanje {session} [ParlaMint SAMPLE]",
    main_title_en: "Serbian parliamentary corpus ParlaMint-RS-T{term}, Session {session} [ParlaMint SAMPLE]",
    sub_title_local: "Mandat {term}, Zasedanje {session}",
    sub_title_en: "Term {term}, Session {session}",
    parliament: "NS",
    download_resp_local: None,
    source_title: "Minutes of the National Assembly of Serbia",
    business_url: "https://otvoreniparlament.rs/",
    parliament_url: "http://www.parlament.gov.rs/",
    address: "Trg Nikole Pašića 13",
    city: "Belgrade",
    speeches_noun: "govora",
    words_noun: "reči",
    thousands_separator: '.',
    show_date_range: true,
};

pub static BOSNIAN: HeaderProfile = HeaderProfile {
    country_code: "BA",
    setting_key: "BA",
    country_name: "Bosnia and Herzegovina",
    local_language: "bs",
    main_title_local: "Bosanski parlamentarni korpus ParlaMint-BA, Mandat {term}, Sjednica {session}[ParlaMint SAMPLE]",
    main_title_en: "Bosnian parliamentary corpus ParlaMint-BA, Term {term}, Session {session} [ParlaMint SAMPLE]",
    sub_title_local: "Zapisnici sjednica parlamentarne skupštine, mandat {term}, sjednica {session}",
    sub_title_en: "Minutes of the Parliamentary Assembly of Bosnia and Herzegovina, Term {term}, Session {session}",
    parliament: "PS",
    download_resp_local: Some("Preuzimanje i čiščenje digitalnog izvora"),
    source_title: "Minutes of the Parliamentary Assembly of Bosnia and Herzegovina",
    business_url: "https://www.javnarasprava.ba/",
    parliament_url: "https://www.parlament.ba/",
    address: "Trg BiH 1",
    city: "Sarajevo",
    speeches_noun: "govora",
    words_noun: "riječi",
    thousands_separator: '.',
    show_date_range: false,
};

/// Profile for a language code. Unrecognized codes fall back to Croatian.
pub fn profile_for(language: &str) -> &'static HeaderProfile {
    let language = language.trim().to_lowercase();
    if language.starts_with("sr") {
        &SERBIAN
    } else if language == "bs" {
        &BOSNIAN
    } else {
        if language != "hr" {
            warn!(language = %language, "no header profile for language, using Croatian");
        }
        &CROATIAN
    }
}

/// Session-specific values interpolated into the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderContext {
    pub term: u32,
    pub session: u32,
    /// Earliest `From` and latest `To` of the session's rows.
    pub date_range: Option<(String, String)>,
    pub compiled_on: NaiveDate,
}

impl HeaderProfile {
    fn fill(&self, template: &str, context: &HeaderContext) -> String {
        template
            .replace("{term}", &context.term.to_string())
            .replace("{session}", &context.session.to_string())
    }

    fn local(&self, name: &str) -> Element {
        Element::new(name).attr("xml:lang", self.local_language)
    }
}

fn english(name: &str) -> Element {
    Element::new(name).attr("xml:lang", "en")
}

/// Build the `teiHeader` element. Statistics are placeholders (`0`) until
/// the renderer recounts them.
pub fn build_header(profile: &HeaderProfile, context: &HeaderContext) -> Element {
    Element::new("teiHeader")
        .child(
            Element::new("fileDesc")
                .child(title_stmt(profile, context))
                .child(Element::new("editionStmt").child(Element::new("edition").text("0.0a")))
                .child(extent(profile))
                .child(publication_stmt(profile))
                .child(source_desc(profile, context)),
        )
        .child(encoding_desc(profile))
        .child(profile_desc(profile, context))
        .child(
            english("revisionDesc").child(
                Element::new("change")
                    .attr("when", context.compiled_on.format("%Y-%m-%d").to_string())
                    .child(Element::new("name").text(COMPILER))
                    .text("Compile from source"),
            ),
        )
}

fn title_stmt(profile: &HeaderProfile, context: &HeaderContext) -> Element {
    let term = context.term;
    let session = context.session;
    let mut download = Element::new("respStmt").child(
        Element::new("persName")
            .attr("ref", "https://orcid.org/0000-0001-7169-9152")
            .text("Nikola Ljubešić"),
    );
    if let Some(resp) = profile.download_resp_local {
        download.append(profile.local("resp").text(resp));
    }
    download.append(english("resp").text(DOWNLOAD_EN));

    let encoding = |person: Element| {
        Element::new("respStmt")
            .child(person)
            .child(profile.local("resp").text(CODING_LOCAL))
            .child(english("resp").text(CODING_EN))
    };

    Element::new("titleStmt")
        .child(
            profile
                .local("title")
                .attr("type", "main")
                .text(profile.fill(profile.main_title_local, context)),
        )
        .child(
            english("title")
                .attr("type", "main")
                .text(profile.fill(profile.main_title_en, context)),
        )
        .child(
            profile
                .local("title")
                .attr("type", "sub")
                .text(profile.fill(profile.sub_title_local, context)),
        )
        .child(
            english("title")
                .attr("type", "sub")
                .text(profile.fill(profile.sub_title_en, context)),
        )
        .child(
            Element::new("meeting")
                .attr("n", format!("T{term:02}S{session}"))
                .attr("corresp", format!("#{}", profile.parliament))
                .attr("ana", format!("#parla.term #{}.{term}", profile.parliament))
                .text(format!("{term}. mandat, {session}. sjednica")),
        )
        .child(download)
        .child(encoding(
            Element::new("persName")
                .attr("ref", "https://orcid.org/0000-0002-1560-4099")
                .text("Tomaž Erjavec"),
        ))
        .child(encoding(Element::new("persName").text(COMPILER)))
        .child(
            Element::new("funder")
                .child(profile.local("orgName").text(CLARIN_LOCAL))
                .child(english("orgName").text("The CLARIN research infrastructure")),
        )
}

fn measure(unit: &str, language: &str) -> Element {
    Element::new("measure")
        .attr("unit", unit)
        .attr("quantity", "0")
        .attr("xml:lang", language)
        .text("0")
}

fn extent(profile: &HeaderProfile) -> Element {
    Element::new("extent")
        .child(measure("speeches", profile.local_language))
        .child(measure("speeches", "en"))
        .child(measure("words", profile.local_language))
        .child(measure("words", "en"))
}

fn publication_stmt(profile: &HeaderProfile) -> Element {
    let licence_ref = |text: &str| Element::new("ref").attr("target", LICENCE_URL).text(text);
    Element::new("publicationStmt")
        .child(
            Element::new("publisher")
                .child(profile.local("orgName").text(CLARIN_LOCAL))
                .child(english("orgName").text("CLARIN research infrastructure"))
                .child(
                    Element::new("ref")
                        .attr("target", "https://www.clarin.eu/")
                        .text("www.clarin.eu"),
                ),
        )
        .child(
            Element::new("idno")
                .attr("subtype", "handle")
                .attr("type", "URI")
                .text(HANDLE),
        )
        .child(
            Element::new("availability")
                .attr("status", "free")
                .child(Element::new("licence").text(LICENCE_URL))
                .child(
                    profile
                        .local("p")
                        .text("Ovaj rad je dostupan pod ")
                        .child(licence_ref(
                            "međunarodnom licencom Creative Commons Imenovanje 4.0",
                        )),
                )
                .child(
                    english("p")
                        .text("This work is licensed under the ")
                        .child(licence_ref(
                            "Creative Commons Attribution 4.0 International License",
                        )),
                ),
        )
        .child(
            Element::new("date")
                .attr("when", PUBLICATION_DATE)
                .text(PUBLICATION_DATE),
        )
}

fn source_desc(profile: &HeaderProfile, context: &HeaderContext) -> Element {
    let mut bibl = Element::new("bibl")
        .child(english("title").attr("type", "main").text(profile.source_title))
        .child(
            Element::new("idno")
                .attr("type", "URI")
                .attr("subtype", "business")
                .text(profile.business_url),
        )
        .child(
            Element::new("idno")
                .attr("type", "URI")
                .attr("subtype", "parliament")
                .text(profile.parliament_url),
        );
    if profile.show_date_range
        && let Some((from, to)) = &context.date_range
    {
        bibl.append(
            Element::new("date")
                .attr("from", from)
                .attr("to", to)
                .text(format!("{from} - {to}")),
        );
    }
    Element::new("sourceDesc").child(bibl)
}

fn encoding_desc(profile: &HeaderProfile) -> Element {
    let parlamint = |p: Element| {
        p.child(
            Element::new("ref")
                .attr("target", PARLAMINT_URL)
                .text("ParlaMint"),
        )
    };
    let mut namespace = Element::new("namespace").attr("name", TEI_NS);
    for gi in DECLARED_TAGS {
        namespace.append(Element::new("tagUsage").attr("gi", *gi).attr("occurs", "0"));
    }
    Element::new("encodingDesc")
        .child(
            Element::new("projectDesc")
                .child(parlamint(profile.local("p")))
                .child(parlamint(english("p"))),
        )
        .child(Element::new("tagsDecl").child(namespace))
}

fn profile_desc(profile: &HeaderProfile, context: &HeaderContext) -> Element {
    let mut setting = Element::new("setting")
        .child(Element::new("name").attr("type", "address").text(profile.address))
        .child(Element::new("name").attr("type", "city").text(profile.city))
        .child(
            Element::new("name")
                .attr("type", "country")
                .attr("key", profile.setting_key)
                .text(profile.country_name),
        );
    if profile.show_date_range
        && let Some((from, to)) = &context.date_range
    {
        setting.append(
            Element::new("date")
                .attr("from", from)
                .attr("to", to)
                .attr("ana", "#parla.session")
                .text(format!("{from} - {to}")),
        );
    }
    Element::new("profileDesc").child(Element::new("settingDesc").child(setting))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> HeaderContext {
        HeaderContext {
            term: 9,
            session: 3,
            date_range: Some(("2016-10-14".to_string(), "2016-10-21".to_string())),
            compiled_on: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        }
    }

    #[test]
    fn profile_selection() {
        assert_eq!(profile_for("hr").country_code, "HR");
        assert_eq!(profile_for("HR").country_code, "HR");
        assert_eq!(profile_for("sr").country_code, "RS");
        assert_eq!(profile_for("sr-Latn").country_code, "RS");
        assert_eq!(profile_for("BS").country_code, "BA");
        assert_eq!(profile_for("sl").country_code, "HR");
    }

    #[test]
    fn meeting_and_titles_are_interpolated() {
        let header = build_header(&CROATIAN, &context());
        let meeting = header.find_path(&["fileDesc", "titleStmt", "meeting"]).unwrap();
        assert_eq!(meeting.get_attr("n"), Some("T09S3"));
        assert_eq!(meeting.get_attr("corresp"), Some("#HS"));
        assert_eq!(meeting.get_attr("ana"), Some("#parla.term #HS.9"));
        assert_eq!(meeting.own_text(), "9. mandat, 3. sjednica");

        let title = header.find_path(&["fileDesc", "titleStmt", "title"]).unwrap();
        assert_eq!(
            title.own_text(),
            "Hrvatski parlamentarni korpus ParlaMint-HR, Mandat 9, Sjednica 3[ParlaMint SAMPLE]"
        );
        let change = header.find_path(&["revisionDesc", "change"]).unwrap();
        assert_eq!(change.get_attr("when"), Some("2024-05-01"));
        assert_eq!(change.own_text(), "Compile from source");
    }

    #[test]
    fn date_range_only_in_serbian_header() {
        let serbian = build_header(&SERBIAN, &context());
        assert_eq!(serbian.count_named("date"), 3);
        let setting_date = serbian
            .find_path(&["profileDesc", "settingDesc", "setting", "date"])
            .unwrap();
        assert_eq!(setting_date.get_attr("from"), Some("2016-10-14"));
        assert_eq!(setting_date.own_text(), "2016-10-14 - 2016-10-21");

        let croatian = build_header(&CROATIAN, &context());
        assert_eq!(croatian.count_named("date"), 1);
    }

    #[test]
    fn serbian_download_resp_is_english_only() {
        let header = build_header(&SERBIAN, &context());
        let title_stmt = header.find_path(&["fileDesc", "titleStmt"]).unwrap();
        let first_resp = title_stmt
            .child_elements()
            .find(|e| e.name() == "respStmt")
            .unwrap();
        assert_eq!(first_resp.count_named("resp"), 1);
    }

    #[test]
    fn declares_every_tag_once() {
        let header = build_header(&BOSNIAN, &context());
        assert_eq!(header.count_named("tagUsage"), DECLARED_TAGS.len());
        assert_eq!(header.count_named("measure"), 4);
    }
}
