use crate::figure::Figure;
use crate::model::Element;

/// Per-figure vocabulary shared by the Meji texts and the derived templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lexicon {
    pub figure: Figure,
    pub orisha: &'static str,
    pub element: Element,
    /// A noun phrase with its article, e.g. "le soleil levant".
    pub image: &'static str,
    /// What is offered, without article.
    pub offering: &'static str,
    /// An infinitive phrase, read after "Ne pas".
    pub taboo: &'static str,
    /// A noun phrase with its article.
    pub virtue: &'static str,
}

/// Vocabulary in traditional order.
pub static LEXICON: [Lexicon; 16] = [
    Lexicon {
        figure: Figure::Ogbe,
        orisha: "Obatala",
        element: Element::Feu,
        image: "le soleil levant",
        offering: "deux colombes blanches",
        taboo: "se présenter devant l'autel en vêtements souillés",
        virtue: "la droiture",
    },
    Lexicon {
        figure: Figure::Oyeku,
        orisha: "Egungun",
        element: Element::Terre,
        image: "la nuit sans lune",
        offering: "un coq noir et du vin de palme",
        taboo: "sortir seul à minuit",
        virtue: "la patience",
    },
    Lexicon {
        figure: Figure::Iwori,
        orisha: "Orunmila",
        element: Element::Eau,
        image: "l'eau profonde du puits",
        offering: "des noix de kola et du miel",
        taboo: "mépriser le conseil d'un aîné",
        virtue: "le discernement",
    },
    Lexicon {
        figure: Figure::Odi,
        orisha: "Yemoja",
        element: Element::Eau,
        image: "la calebasse scellée",
        offering: "des ignames pilées et des cauris",
        taboo: "trahir un secret confié",
        virtue: "la fidélité",
    },
    Lexicon {
        figure: Figure::Irosun,
        orisha: "Olokun",
        element: Element::Feu,
        image: "la poudre rouge de camwood",
        offering: "de l'huile de palme rouge et un coq",
        taboo: "dormir sans avoir couvert le feu",
        virtue: "la vigilance",
    },
    Lexicon {
        figure: Figure::Owonrin,
        orisha: "Esu",
        element: Element::Air,
        image: "le tourbillon du carrefour",
        offering: "du gin et du maïs grillé",
        taboo: "manger en marchant",
        virtue: "la souplesse",
    },
    Lexicon {
        figure: Figure::Obara,
        orisha: "Sango",
        element: Element::Feu,
        image: "l'éclair sur la plaine",
        offering: "un bélier et des gâteaux de haricots",
        taboo: "se vanter de sa fortune",
        virtue: "l'humilité",
    },
    Lexicon {
        figure: Figure::Okanran,
        orisha: "Esu",
        element: Element::Air,
        image: "la voix qui crie sur la colline",
        offering: "du gin et de l'huile de palme",
        taboo: "élever la voix contre un aîné",
        virtue: "la retenue",
    },
    Lexicon {
        figure: Figure::Ogunda,
        orisha: "Ogun",
        element: Element::Feu,
        image: "la machette qui défriche",
        offering: "un chien et du vin de palme",
        taboo: "verser le sang sans raison",
        virtue: "le courage",
    },
    Lexicon {
        figure: Figure::Osa,
        orisha: "Oya",
        element: Element::Air,
        image: "le vent qui précède l'orage",
        offering: "neuf aubergines et un tissu multicolore",
        taboo: "fuir devant une épreuve",
        virtue: "la constance",
    },
    Lexicon {
        figure: Figure::Ika,
        orisha: "Osanyin",
        element: Element::Eau,
        image: "le serpent lové sous la feuille",
        offering: "des feuilles sauvages et un escargot",
        taboo: "toucher un serpent",
        virtue: "la mesure",
    },
    Lexicon {
        figure: Figure::Oturupon,
        orisha: "Babaluaye",
        element: Element::Terre,
        image: "la terre sèche avant la pluie",
        offering: "des haricots grillés et de la bière de maïs",
        taboo: "balayer la maison après la tombée de la nuit",
        virtue: "l'endurance",
    },
    Lexicon {
        figure: Figure::Otura,
        orisha: "Orunmila",
        element: Element::Air,
        image: "la colombe au-dessus du marché",
        offering: "du lait et des gâteaux de riz",
        taboo: "mentir devant un témoin",
        virtue: "la paix",
    },
    Lexicon {
        figure: Figure::Irete,
        orisha: "Onile",
        element: Element::Terre,
        image: "la houe qui retourne la terre",
        offering: "des ignames et un escargot",
        taboo: "frapper le sol avec colère",
        virtue: "la ténacité",
    },
    Lexicon {
        figure: Figure::Ose,
        orisha: "Osun",
        element: Element::Eau,
        image: "la rivière aux eaux douces",
        offering: "du miel, des oranges et un bracelet de laiton",
        taboo: "se moquer d'une femme enceinte",
        virtue: "la douceur",
    },
    Lexicon {
        figure: Figure::Ofun,
        orisha: "Obatala",
        element: Element::Terre,
        image: "la craie blanche d'efun",
        offering: "de l'efun, du coton et des escargots",
        taboo: "boire du vin de palme",
        virtue: "la pureté",
    },
];

impl Lexicon {
    /// The vocabulary of a figure.
    pub fn of(figure: Figure) -> &'static Self {
        &LEXICON[figure.seniority()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::figure::TRADITIONAL_ORDER;

    #[test]
    fn test_lexicon_follows_traditional_order() {
        for (entry, figure) in LEXICON.iter().zip(TRADITIONAL_ORDER) {
            assert_eq!(entry.figure, figure);
        }
    }

    #[test]
    fn test_lexicon_lookup() {
        assert_eq!(Lexicon::of(Figure::Ogunda).orisha, "Ogun");
        assert_eq!(Lexicon::of(Figure::Ose).element, Element::Eau);
    }

    #[test]
    fn test_elements_are_balanced() {
        for element in Element::ALL {
            let count = LEXICON.iter().filter(|l| l.element == element).count();
            assert_eq!(count, 4, "{element}");
        }
    }
}
