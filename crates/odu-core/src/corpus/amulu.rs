//! The 240 derived Odu, composed from the vocabulary of their two legs.

use crate::corpus::lexicon::Lexicon;
use crate::decode::Legs;
use crate::model::EntryText;

/// Compose the text of a derived Odu. The right leg leads: it gives the
/// entry its orisha and element.
pub fn compose(legs: Legs) -> EntryText {
    let (r, l) = (legs.right, legs.left);
    let (rx, lx) = (Lexicon::of(r), Lexicon::of(l));

    let meaning = format!(
        "{r} so fun {l} : {r} apporte {}, et {l} y répond par {}. Quand {} rencontre {}, \
         la destinée du consultant se joue entre deux forces : la première demande {}, la \
         seconde réclame {}. Cet Odu conseille d'honorer {} avant toute entreprise et de ne \
         rien négliger de ce qu'enseigne {l}.",
        r.theme(),
        l.theme(),
        rx.image,
        lx.image,
        rx.virtue,
        lx.virtue,
        rx.orisha,
    );

    let proverbs = vec![
        format!("Quand {} rencontre {}, le sage se tait et observe.", rx.image, lx.image),
        format!("Ce qu'{r} commence, {l} l'achève."),
        format!("Celui qui marche avec {} ne craint pas le chemin d'{l}.", rx.virtue),
    ];

    let verse = format!(
        "Ifá dit : {r} partait pour la maison d'{l}. On consulta Ifá pour lui le jour où {} \
         devait traverser {}. On lui dit d'offrir {} à {}. Il fit l'offrande et trouva {} au \
         bout du chemin. Depuis ce jour, on chante : « {r} et {l} ne se quittent plus ».",
        rx.image, lx.image, rx.offering, rx.orisha, lx.virtue,
    );

    EntryText {
        meaning,
        proverbs,
        ese_ifa_verses: vec![verse],
        orisha: rx.orisha.to_string(),
        prescriptions: format!(
            "Offrir {} à {}, puis {} à {}.",
            rx.offering, rx.orisha, lx.offering, lx.orisha
        ),
        interdictions: format!("Ne pas {} ; ne pas {}.", rx.taboo, lx.taboo),
        element: rx.element,
    }
}
