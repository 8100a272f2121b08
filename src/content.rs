//! Guide content
//!
//! The built-in "Guia Completo de Exorcismo" plus loading of a
//! replacement guide from JSON. Only presence checks are applied.

use crate::error::GuideError;
use crate::types::{ExpandablePanel, FaqEntry, PrayerCategory, PrayerItem, Section, SectionKind};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// The declared, fixed content of the guide
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guide {
    pub title: String,
    pub sections: Vec<Section>,
    #[serde(default)]
    pub categories: Vec<PrayerCategory>,
    #[serde(default)]
    pub prayers: Vec<PrayerItem>,
    #[serde(default)]
    pub faqs: Vec<FaqEntry>,
    #[serde(default)]
    pub panels: Vec<ExpandablePanel>,
}

impl Guide {
    /// Load a guide from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read guide from {:?}", path))?;
        let guide: Guide = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse guide from {:?}", path))?;
        guide.validate()?;
        Ok(guide)
    }

    /// Presence checks only
    pub fn validate(&self) -> Result<(), GuideError> {
        if self.sections.is_empty() {
            return Err(GuideError::Content("guide declares no sections".into()));
        }
        if let Some(s) = self.sections.iter().find(|s| s.id.trim().is_empty()) {
            return Err(GuideError::Content(format!(
                "section \"{}\" has an empty identifier",
                s.title
            )));
        }
        Ok(())
    }

    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    pub fn section_index(&self, id: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.id == id)
    }

    pub fn has_category(&self, id: &str) -> bool {
        self.categories.iter().any(|c| c.id == id)
    }

    pub fn prayer(&self, id: u32) -> Option<&PrayerItem> {
        self.prayers.iter().find(|p| p.id == id)
    }

    pub fn panels_in<'a>(
        &'a self,
        section: &'a str,
    ) -> impl Iterator<Item = &'a ExpandablePanel> + 'a {
        self.panels.iter().filter(move |p| p.section == section)
    }

    /// The built-in guide
    pub fn builtin() -> Self {
        Self {
            title: "Guia Completo de Exorcismo".into(),
            sections: vec![
                section(
                    "home",
                    "Início",
                    SectionKind::Home,
                    "Bem-vindo ao guia",
                    &[
                        "Este guia reúne definições, história, rituais, orações e perguntas frequentes sobre o exorcismo na tradição cristã.",
                        "Escolha um dos cartões abaixo ou use as setas para navegar entre as seções.",
                    ],
                ),
                section(
                    "definicao",
                    "Definição",
                    SectionKind::Article,
                    "O que é o exorcismo",
                    &[
                        "O exorcismo é a oração pela qual a Igreja pede publicamente, com autoridade, em nome de Jesus Cristo, que uma pessoa ou objeto seja protegido contra a influência do maligno.",
                        "Distingue-se entre o exorcismo simples, presente no rito do batismo, e o exorcismo solene, reservado a sacerdotes autorizados pelo bispo.",
                    ],
                ),
                section(
                    "historia",
                    "História",
                    SectionKind::Article,
                    "Das origens aos dias de hoje",
                    &[
                        "Os Evangelhos narram diversas libertações realizadas por Jesus, e os primeiros cristãos continuaram essa prática invocando o seu nome.",
                        "Em 1614 o Rituale Romanum fixou o rito que seria usado por mais de três séculos, revisto em 1999 com o rito De Exorcismis et Supplicationibus Quibusdam.",
                    ],
                ),
                section(
                    "rituais",
                    "Rituais",
                    SectionKind::Article,
                    "Como o rito é celebrado",
                    &[
                        "O rito começa com a aspersão de água benta, seguida da ladainha dos santos, da leitura do Evangelho e da imposição das mãos.",
                        "O exorcista apresenta o crucifixo e pronuncia a fórmula deprecativa e, se necessário, a imperativa.",
                    ],
                ),
                section(
                    "oracoes",
                    "Orações",
                    SectionKind::Prayers,
                    "Orações de proteção, cura e libertação",
                    &["Filtre por categoria e copie o texto de qualquer oração."],
                ),
                section(
                    "faq",
                    "FAQ",
                    SectionKind::Faq,
                    "Perguntas frequentes",
                    &[],
                ),
            ],
            categories: vec![
                category("protecao", "Proteção"),
                category("cura", "Cura"),
                category("libertacao", "Libertação"),
            ],
            prayers: vec![
                prayer(
                    1,
                    "Oração a São Miguel Arcanjo",
                    "protecao",
                    "São Miguel Arcanjo, defendei-nos no combate, sede o nosso refúgio contra as maldades e ciladas do demônio. Ordene-lhe Deus, instantemente o pedimos, e vós, príncipe da milícia celeste, pela virtude divina, precipitai no inferno a satanás e aos outros espíritos malignos que andam pelo mundo para perder as almas. Amém.",
                ),
                prayer(
                    2,
                    "Oração ao Anjo da Guarda",
                    "protecao",
                    "Santo Anjo do Senhor, meu zeloso guardador, se a ti me confiou a piedade divina, sempre me rege, me guarda, me governa e me ilumina. Amém.",
                ),
                prayer(
                    3,
                    "Oração de cura interior",
                    "cura",
                    "Senhor Jesus, entra no mais profundo do meu coração e cura as feridas que me afastam de ti. Restaura em mim a paz e a alegria da tua presença. Amém.",
                ),
                prayer(
                    4,
                    "Oração pelos enfermos",
                    "cura",
                    "Pai de misericórdia, olha com bondade para os que sofrem no corpo e no espírito; concede-lhes alívio, força e esperança. Por Cristo, nosso Senhor. Amém.",
                ),
                prayer(
                    5,
                    "Oração de libertação",
                    "libertacao",
                    "Em nome de Jesus Cristo, renuncio a todo mal e a toda influência que não venha de Deus. Cobre-me, Senhor, com o teu sangue precioso e liberta-me de toda opressão. Amém.",
                ),
            ],
            faqs: vec![
                faq(
                    1,
                    "Qualquer pessoa pode fazer um exorcismo?",
                    "Não. O exorcismo solene só pode ser realizado por um sacerdote com licença expressa do bispo diocesano. Os fiéis podem rezar orações de libertação.",
                ),
                faq(
                    2,
                    "Como a Igreja distingue possessão de doença?",
                    "Antes de qualquer rito exige-se discernimento cuidadoso, frequentemente com apoio de médicos e psicólogos, para excluir causas naturais.",
                ),
                faq(
                    3,
                    "O exorcismo ainda é praticado hoje?",
                    "Sim. Muitas dioceses mantêm exorcistas nomeados e o rito foi revisto e publicado novamente em 1999.",
                ),
                faq(
                    4,
                    "Que orações ajudam na proteção diária?",
                    "A Oração a São Miguel Arcanjo, o Pai-Nosso e a oração ao Anjo da Guarda são as mais recomendadas para o dia a dia.",
                ),
            ],
            panels: vec![
                panel(
                    1,
                    "definicao",
                    "Exorcismo simples e solene",
                    "O exorcismo simples integra a celebração do batismo; o solene é um sacramental dirigido a casos de possessão, celebrado segundo o ritual próprio.",
                ),
                panel(
                    2,
                    "historia",
                    "O Rituale Romanum",
                    "Promulgado pelo papa Paulo V, o Rituale Romanum reuniu os ritos dos sacramentos e sacramentais, incluindo o capítulo sobre o exorcismo.",
                ),
                panel(
                    3,
                    "rituais",
                    "Sinais tradicionais",
                    "A tradição aponta sinais como aversão ao sagrado, conhecimento de línguas desconhecidas e força desproporcional, sempre avaliados com prudência.",
                ),
            ],
        }
    }
}

fn section(
    id: &str,
    title: &str,
    kind: SectionKind,
    summary: &str,
    paragraphs: &[&str],
) -> Section {
    Section {
        id: id.into(),
        title: title.into(),
        kind,
        summary: summary.into(),
        paragraphs: paragraphs.iter().map(|p| p.to_string()).collect(),
    }
}

fn category(id: &str, label: &str) -> PrayerCategory {
    PrayerCategory {
        id: id.into(),
        label: label.into(),
    }
}

fn prayer(id: u32, title: &str, category: &str, text: &str) -> PrayerItem {
    PrayerItem {
        id,
        title: title.into(),
        category: category.into(),
        text: text.into(),
    }
}

fn faq(id: u32, question: &str, answer: &str) -> FaqEntry {
    FaqEntry {
        id,
        question: question.into(),
        answer: answer.into(),
    }
}

fn panel(id: u32, section: &str, title: &str, body: &str) -> ExpandablePanel {
    ExpandablePanel {
        id,
        section: section.into(),
        title: title.into(),
        body: body.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_is_valid() {
        let guide = Guide::builtin();
        guide.validate().unwrap();
        assert_eq!(guide.sections[0].id, "home");
        assert!(guide
            .prayers
            .iter()
            .all(|p| guide.has_category(&p.category)));
        assert!(guide
            .panels
            .iter()
            .all(|p| guide.section(&p.section).is_some()));
    }

    #[test]
    fn test_empty_guide_rejected() {
        let guide = Guide {
            title: "x".into(),
            sections: Vec::new(),
            categories: Vec::new(),
            prayers: Vec::new(),
            faqs: Vec::new(),
            panels: Vec::new(),
        };
        assert!(matches!(guide.validate(), Err(GuideError::Content(_))));
    }

    #[test]
    fn test_load_minimal_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("guide.json");
        fs::write(
            &path,
            r#"{
                "title": "Mini",
                "sections": [
                    {"id": "home", "title": "Home", "kind": "home"},
                    {"id": "rituais", "title": "Rituais"}
                ],
                "prayers": [{"id": 1, "title": "P", "category": "cura", "text": "t"}]
            }"#,
        )
        .unwrap();

        let guide = Guide::load(&path).unwrap();
        assert_eq!(guide.sections.len(), 2);
        assert_eq!(guide.sections[1].kind, SectionKind::Article);
        assert_eq!(guide.section_index("rituais"), Some(1));
        assert!(guide.faqs.is_empty());
    }

    #[test]
    fn test_load_rejects_blank_section_id() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("guide.json");
        fs::write(&path, r#"{"title": "x", "sections": [{"id": " ", "title": "Blank"}]}"#).unwrap();
        assert!(Guide::load(&path).is_err());
    }
}
