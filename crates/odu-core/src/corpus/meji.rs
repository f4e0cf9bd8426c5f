//! The sixteen principal Odu, authored in full.

use crate::figure::Figure;

/// Authored prose of a Meji. Orisha and element come from the lexicon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MejiText {
    pub figure: Figure,
    pub meaning: &'static str,
    pub proverbs: &'static [&'static str],
    pub verses: &'static [&'static str],
    pub prescriptions: &'static str,
    pub interdictions: &'static str,
}

/// Meji texts in traditional order.
pub static MEJI: [MejiText; 16] = [
    MejiText {
        figure: Figure::Ogbe,
        meaning: "Ogbe Meji est la lumière pure, le premier des Odu et le père de tous les \
                  autres. Il annonce l'ouverture des chemins, la prospérité, la longue vie et la \
                  réussite de ce qui est entrepris avec droiture. Le consultant se tient au \
                  commencement d'un cycle : ce qu'il sème aujourd'hui dans la clarté portera \
                  fruit, mais l'orgueil et la précipitation peuvent aveugler celui que la \
                  lumière favorise.",
        proverbs: &[
            "Le soleil ne demande pas la permission pour se lever.",
            "La lumière qui éclaire le chef éclaire aussi le chemin de l'étranger.",
            "Celui qui marche droit ne craint pas le jour.",
            "Un seul rayon suffit à chasser l'obscurité de toute une case.",
        ],
        verses: &[
            "Ifá dit : lorsque le monde était encore dans l'ombre, Ogbe descendit du ciel avec \
             une calebasse de lumière. On consulta Ifá pour lui, et on lui dit d'offrir deux \
             colombes blanches à Obatala. Il fit l'offrande, ouvrit la calebasse, et le premier \
             matin naquit.",
            "Ifá dit : Ogbe voulait bâtir sa maison sur la colline la plus haute. Les anciens \
             lui conseillèrent de poser d'abord une pierre pour chacun de ses voisins. Il obéit, \
             et sa maison ne manqua jamais d'hôtes ni de protecteurs.",
            "Ifá dit : un homme riche refusa de saluer Ogbe au marché. Le lendemain, le brouillard \
             couvrit ses champs et il ne retrouva plus sa route. Il revint saluer Ogbe, et le \
             brouillard se leva.",
        ],
        prescriptions: "Offrir deux colombes blanches à Obatala, porter du blanc pendant sept jours \
                        et rendre visite à un aîné pour recevoir sa bénédiction.",
        interdictions: "Ne pas se présenter devant l'autel en vêtements souillés ; ne pas consommer \
                        d'alcool le jour de l'offrande ; ne pas maudire quiconque.",
    },
    MejiText {
        figure: Figure::Oyeku,
        meaning: "Oyeku Meji est la nuit, la mère de tous les Odu, gardienne du mystère de la \
                  mort et de la renaissance. Il annonce une fin qui prépare un commencement, \
                  la protection des ancêtres et la nécessité de respecter ce qui est caché. Le \
                  consultant doit se garder des imprudences, honorer ses morts et accepter \
                  qu'une part de sa vie s'achève pour qu'une autre puisse naître.",
        proverbs: &[
            "La nuit n'efface pas le chemin, elle le cache à ceux qui courent.",
            "On n'enterre pas une graine pour la perdre.",
            "Celui qui honore ses morts ne marche jamais seul.",
            "La lune ne se montre qu'à celui qui sait attendre.",
        ],
        verses: &[
            "Ifá dit : la Mort vint chercher Oyeku avant son temps. Oyeku avait offert un coq \
             noir et du vin de palme aux Egungun. Les ancêtres dansèrent devant sa porte, et la \
             Mort, ne le reconnaissant pas parmi les masques, repartit les mains vides.",
            "Ifá dit : Oyeku cherchait le repos et ne le trouvait nulle part. On lui dit de \
             coucher sur la terre nue pendant trois nuits. À l'aube du quatrième jour, il se \
             releva plus fort qu'il ne l'avait jamais été.",
            "Ifá dit : une femme pleurait un enfant perdu. Oyeku lui dit de planter un palmier \
             à l'endroit de sa tristesse. Sept saisons plus tard, elle mit au monde un fils qui \
             portait le nom du palmier.",
        ],
        prescriptions: "Offrir un coq noir et du vin de palme aux Egungun, allumer une lampe pour \
                        les ancêtres et réciter les noms des défunts de la lignée.",
        interdictions: "Ne pas sortir seul à minuit ; ne pas manger de nourriture laissée \
                        découverte pendant la nuit ; ne pas assister à des funérailles pendant \
                        sept jours.",
    },
    MejiText {
        figure: Figure::Iwori,
        meaning: "Iwori Meji est le regard tourné vers l'intérieur, l'Odu de la réflexion, de \
                  la connaissance et de la vision profonde. Il annonce que la réponse cherchée \
                  se trouve déjà chez le consultant, pourvu qu'il prenne le temps de la voir. \
                  Cet Odu favorise l'étude, l'initiation et les voyages de l'esprit, et met en \
                  garde contre les apparences trompeuses.",
        proverbs: &[
            "L'eau du puits est claire pour qui se penche avec calme.",
            "Le caméléon regarde longtemps avant de changer de couleur.",
            "Celui qui ne se connaît pas prend son reflet pour un ennemi.",
            "La sagesse est un sac que l'on remplit en se taisant.",
        ],
        verses: &[
            "Ifá dit : Iwori fut envoyé chercher l'eau de la sagesse au fond de la terre. Tous \
             ceux qui descendaient avant lui remontaient les mains vides. Iwori s'assit au bord \
             du puits et attendit que l'eau se calme ; il vit alors le chemin.",
            "Ifá dit : deux frères se disputaient l'héritage de leur père. Iwori leur tendit un \
             miroir d'eau. Chacun y vit le visage de l'autre, et la querelle cessa.",
            "Ifá dit : Iwori offrit des noix de kola et du miel à Orunmila avant d'entreprendre \
             le voyage. Sur la route, il rencontra trois hommes qui lui mentirent ; grâce à \
             l'offrande, il reconnut chacun de leurs mensonges.",
        ],
        prescriptions: "Offrir des noix de kola et du miel à Orunmila, méditer chaque matin devant \
                        un bol d'eau claire et consulter Ifá avant toute décision importante.",
        interdictions: "Ne pas mépriser le conseil d'un aîné ; ne pas juger sur les apparences ; \
                        ne pas manger de gibier abattu par un autre.",
    },
    MejiText {
        figure: Figure::Odi,
        meaning: "Odi Meji est la matrice et le sceau : il protège ce qui est en gestation et \
                  enferme ce qui doit mûrir à l'abri des regards. Il annonce la fertilité, la \
                  fidélité récompensée et la protection contre les ennemis, mais aussi \
                  l'obstacle qui retient le consultant tant qu'il n'a pas tenu sa parole. La \
                  patience et la loyauté ouvrent ce qu'Odi a fermé.",
        proverbs: &[
            "La calebasse fermée garde sa promesse.",
            "L'enfant ne sort du ventre que lorsque son heure est venue.",
            "Le mur qui protège la maison empêche aussi d'en sortir.",
            "Une parole donnée pèse plus lourd qu'un sac de cauris.",
        ],
        verses: &[
            "Ifá dit : Odi désirait un enfant et n'en avait pas. On lui dit d'offrir des ignames \
             pilées et des cauris à Yemoja et de garder le silence sur son espoir. Elle garda \
             le secret, et l'enfant vint avant la saison des pluies.",
            "Ifá dit : les ennemis d'Odi encerclèrent sa maison. Elle ferma sa porte et boucha \
             ses fenêtres avec de l'argile. Pendant sept jours, ils ne trouvèrent aucune \
             ouverture, puis ils s'en allèrent.",
            "Ifá dit : un chasseur promit à Odi de partager sa prise et n'en fit rien. La forêt \
             se referma sur lui, et il ne retrouva son chemin qu'après avoir tenu sa promesse.",
        ],
        prescriptions: "Offrir des ignames pilées et des cauris à Yemoja, nouer une cordelette \
                        blanche autour de la taille et rendre tout ce qui a été emprunté.",
        interdictions: "Ne pas trahir un secret confié ; ne pas dormir hors de sa maison pendant \
                        neuf jours ; ne pas manger de poisson fumé.",
    },
    MejiText {
        figure: Figure::Irosun,
        meaning: "Irosun Meji est la mémoire du sang et la vigilance. Il rappelle le consultant \
                  à ses ancêtres, à sa lignée et aux promesses faites en leur nom. Il annonce \
                  une richesse qui vient par l'héritage ou par la famille, mais prévient d'un \
                  danger que seule l'attention peut écarter : un feu mal couvert, une parole \
                  mal gardée, un proche négligé.",
        proverbs: &[
            "Le sang ne devient pas de l'eau.",
            "Celui qui dort près du feu doit le couvrir avant la nuit.",
            "L'arbre qui oublie ses racines tombe au premier vent.",
            "La poudre rouge marque celui que les ancêtres ont choisi.",
        ],
        verses: &[
            "Ifá dit : Irosun s'endormit en laissant le feu allumé. Ses ancêtres le réveillèrent \
             en rêve, et il éteignit les braises avant que la case ne brûle. Depuis, on offre de \
             l'huile de palme rouge à ceux qui veillent.",
            "Ifá dit : Irosun avait oublié le nom de son grand-père. La chance l'abandonna au \
             marché comme au champ. Il alla demander le nom aux anciens du village, et sa \
             fortune revint le jour même.",
            "Ifá dit : on consulta Ifá pour Irosun le jour où il devait traverser la mer. On lui \
             dit d'offrir un coq à Olokun. Il fit l'offrande, et la mer le porta jusqu'à l'autre \
             rive sans une vague.",
        ],
        prescriptions: "Offrir de l'huile de palme rouge et un coq à Olokun, marquer le front de \
                        poudre de camwood et nourrir l'autel des ancêtres.",
        interdictions: "Ne pas dormir sans avoir couvert le feu ; ne pas renier un parent ; ne pas \
                        porter de rouge en dehors des rites.",
    },
    MejiText {
        figure: Figure::Owonrin,
        meaning: "Owonrin Meji est le renversement : ce qui était en haut descend, ce qui était \
                  en bas s'élève. Il annonce l'imprévu, les retournements de fortune et les \
                  détours qu'impose Esu au voyageur trop sûr de lui. Bien reçu, il apporte \
                  une chance inattendue ; négligé, il transforme la victoire en confusion.",
        proverbs: &[
            "Le carrefour a quatre chemins, mais Esu n'en montre qu'un.",
            "Celui qui rit du vent finit par courir après son chapeau.",
            "La calebasse renversée peut encore porter de l'eau si on la retourne.",
            "Le chemin le plus court est parfois celui qui tourne.",
        ],
        verses: &[
            "Ifá dit : Owonrin partit au marché en oubliant de saluer Esu au carrefour. Son \
             âne se retourna et le ramena chez lui. Il revint avec du gin et du maïs grillé, \
             et cette fois le marché lui fut favorable.",
            "Ifá dit : un roi fit jeter Owonrin hors de la ville. Le vent tourna, le roi perdit \
             son trône, et ce fut Owonrin qu'on vint chercher pour le conseiller.",
            "Ifá dit : Owonrin voulait franchir la rivière à gué. Les eaux montèrent. Il suivit \
             la rive pendant trois jours et trouva un pont que personne n'avait jamais vu.",
        ],
        prescriptions: "Offrir du gin et du maïs grillé à Esu au carrefour, verser de l'huile de \
                        palme sur une pierre latérite et partager un repas avec un étranger.",
        interdictions: "Ne pas manger en marchant ; ne pas se moquer d'un infirme ; ne pas \
                        changer de route sans avoir salué le carrefour.",
    },
    MejiText {
        figure: Figure::Obara,
        meaning: "Obara Meji est la richesse soudaine qui tombe comme la foudre, et l'orgueil \
                  qui la suit. Il annonce la réussite dans le commerce, la parole persuasive \
                  et la faveur de Sango, à condition que le consultant reste humble et \
                  généreux. La fortune d'Obara s'évanouit dès qu'on s'en vante.",
        proverbs: &[
            "L'éclair éclaire un instant, la braise réchauffe toute la nuit.",
            "La richesse qui parle trop attire les voleurs.",
            "Celui qui partage son grenier ne connaît pas la famine.",
            "Le tambour le plus bruyant est souvent le plus creux.",
        ],
        verses: &[
            "Ifá dit : Obara était le plus pauvre des seize frères. On lui dit d'offrir un bélier \
             à Sango. Ses frères se moquèrent de lui. Le soir même, la foudre frappa un arbre \
             creux devant sa porte, et l'arbre était rempli de cauris.",
            "Ifá dit : devenu riche, Obara oublia de saluer son père. Le feu prit à son grenier. \
             Il vint s'agenouiller devant le vieil homme, et la pluie tomba sur les flammes.",
            "Ifá dit : Obara parla si bien au marché que tous achetèrent ses ignames. Un rival \
             jaloux jeta un sort sur ses paroles. Obara offrit des gâteaux de haricots, et le \
             sort se retourna contre celui qui l'avait lancé.",
        ],
        prescriptions: "Offrir un bélier et des gâteaux de haricots à Sango, distribuer une part \
                        de ses gains aux pauvres et frapper le tambour bata en son honneur.",
        interdictions: "Ne pas se vanter de sa fortune ; ne pas manger de haricots noirs ; ne pas \
                        mentir sur le prix d'une marchandise.",
    },
    MejiText {
        figure: Figure::Okanran,
        meaning: "Okanran Meji est la parole franche et le conflit ouvert. Il annonce des \
                  querelles, des procès ou des rivalités qu'il vaut mieux affronter avec \
                  retenue que fuir. C'est aussi l'Odu de la voix qui porte : le consultant a \
                  quelque chose à dire, et sa parole, si elle reste juste, gagnera la cause.",
        proverbs: &[
            "Une seule main ne peut pas applaudir.",
            "La langue n'a pas d'os, mais elle brise les os.",
            "Celui qui crie sur la colline doit savoir qui l'écoute.",
            "La dispute de deux coqs fait le repas du renard.",
        ],
        verses: &[
            "Ifá dit : Okanran entra en guerre contre tout le village. On lui dit d'offrir du gin \
             et de l'huile de palme à Esu et de se taire pendant trois jours. Ses ennemis, ne \
             l'entendant plus, se disputèrent entre eux.",
            "Ifá dit : Okanran fut appelé devant le roi pour répondre d'une faute qu'il n'avait \
             pas commise. Il parla sans colère, et le roi reconnut la vérité dans sa voix.",
            "Ifá dit : Okanran cria si fort sur la colline que les esprits de la forêt se \
             réveillèrent. Il dut leur offrir une chèvre pour retrouver la paix de sa maison.",
        ],
        prescriptions: "Offrir du gin et de l'huile de palme à Esu, garder le silence pendant \
                        trois jours et régler toute dette en souffrance.",
        interdictions: "Ne pas élever la voix contre un aîné ; ne pas prendre part à une \
                        querelle qui ne vous concerne pas ; ne pas manger de viande de chèvre.",
    },
    MejiText {
        figure: Figure::Ogunda,
        meaning: "Ogunda Meji est le fer qui ouvre la voie. Il annonce l'effort, le travail \
                  acharné, la victoire obtenue par le courage, et la protection d'Ogun sur ceux \
                  qui défrichent. Il met en garde contre la violence, les accidents de métal \
                  et la colère qui coupe ce qu'elle voulait seulement tailler.",
        proverbs: &[
            "La machette ne connaît pas la fatigue, c'est la main qui se lasse.",
            "Celui qui défriche la forêt mange le premier fruit.",
            "Le fer chauffé trop vite se brise sous le marteau.",
            "La route ouverte par Ogun ne se referme pas.",
        ],
        verses: &[
            "Ifá dit : quand les divinités descendirent sur terre, la forêt leur barrait le \
             chemin. Seul Ogunda prit sa machette et ouvrit la route. On lui offrit un chien et \
             du vin de palme, et depuis, chaque route porte son nom.",
            "Ifá dit : Ogunda, dans sa colère, coupa l'arbre qui abritait sa propre maison. Il \
             dut dormir sous la pluie jusqu'à ce qu'il eût planté un nouvel arbre.",
            "Ifá dit : un forgeron consulta Ifá pour Ogunda avant la guerre. On lui dit de \
             tremper son épée dans l'huile de palme. Il le fit, et son arme ne se brisa jamais.",
        ],
        prescriptions: "Offrir un chien et du vin de palme à Ogun, nettoyer et huiler les outils \
                        de fer de la maison et commencer les travaux un jour de marché.",
        interdictions: "Ne pas verser le sang sans raison ; ne pas manier de lame sous l'effet \
                        de la colère ; ne pas enjamber un outil de fer posé au sol.",
    },
    MejiText {
        figure: Figure::Osa,
        meaning: "Osa Meji est le vent du changement, qui arrache et disperse avant de \
                  renouveler. Il annonce des bouleversements soudains, des départs, une fuite \
                  ou une transformation profonde, et la force d'Oya qui accompagne ceux qui \
                  tiennent bon. La constance transforme la tempête d'Osa en souffle favorable.",
        proverbs: &[
            "Le vent qui renverse la case balaie aussi la cour.",
            "Celui qui fuit la pluie tombe dans la rivière.",
            "L'arbre aux racines profondes danse avec l'orage.",
            "Le marché change, mais le commerçant patient reste.",
        ],
        verses: &[
            "Ifá dit : Osa voulait fuir la tempête qui approchait de son village. On lui dit \
             d'offrir neuf aubergines et un tissu multicolore à Oya, et de rester. La tempête \
             passa par-dessus sa maison sans toucher le toit.",
            "Ifá dit : les sorcières se réunirent pour tourmenter Osa. Il leur offrit un repas \
             sans sel, et elles devinrent ses protectrices.",
            "Ifá dit : Osa perdit tout ce qu'il possédait en une seule nuit de vent. Au matin, \
             le vent avait déposé devant sa porte les graines d'une récolte plus riche que la \
             précédente.",
        ],
        prescriptions: "Offrir neuf aubergines et un tissu multicolore à Oya, balayer la maison \
                        du seuil vers l'extérieur et garder neuf pièces sous l'oreiller.",
        interdictions: "Ne pas fuir devant une épreuve ; ne pas voyager pendant la saison des \
                        vents sans consulter Ifá ; ne pas manger de mouton.",
    },
    MejiText {
        figure: Figure::Ika,
        meaning: "Ika Meji est le pouvoir contenu, la force qui se tient lovée comme le serpent \
                  sous la feuille. Il annonce des dangers dissimulés, la malveillance d'autrui \
                  et la nécessité de la prudence, mais aussi la puissance des plantes et des \
                  secrets d'Osanyin. Celui qui agit avec mesure retourne contre ses ennemis le \
                  poison qui lui était destiné.",
        proverbs: &[
            "Le serpent ne mord pas celui qui regarde où il pose le pied.",
            "La feuille qui guérit pousse à côté de celle qui tue.",
            "Celui qui se hâte dans la brousse rencontre ce qu'il n'a pas cherché.",
            "La force qui se montre est déjà à moitié vaincue.",
        ],
        verses: &[
            "Ifá dit : Ika traversait la forêt quand un serpent se dressa devant lui. Il avait \
             offert un escargot à Osanyin ; le serpent reconnut l'odeur de l'offrande et se \
             retira sous les feuilles.",
            "Ifá dit : un voisin jaloux empoisonna le puits d'Ika. Ika cueillit une feuille \
             sauvage, la jeta dans l'eau, et le puits redevint pur.",
            "Ifá dit : Ika voulait montrer sa force au roi. On lui dit de la garder cachée. Le \
             jour où le royaume fut attaqué, il fut le seul à pouvoir le défendre.",
        ],
        prescriptions: "Offrir des feuilles sauvages et un escargot à Osanyin, préparer un bain \
                        de plantes pendant sept jours et porter une amulette de protection.",
        interdictions: "Ne pas toucher un serpent ; ne pas cueillir de plantes sans les saluer ; \
                        ne pas révéler ses projets avant leur accomplissement.",
    },
    MejiText {
        figure: Figure::Oturupon,
        meaning: "Oturupon Meji est la terre qui porte la maladie et la guérison. Il annonce \
                  une épreuve du corps ou de l'esprit, des fièvres, des fatigues, mais aussi \
                  l'endurance qui permet de les traverser et la protection de Babaluaye sur \
                  ceux qui le respectent. C'est l'Odu de la mère qui porte l'enfant sur son dos.",
        proverbs: &[
            "La terre sèche boit la première pluie sans rien laisser.",
            "Celui qui porte l'enfant ne sent pas le poids du chemin.",
            "La maladie entre au galop et sort au pas.",
            "On ne se moque pas de la plaie d'autrui.",
        ],
        verses: &[
            "Ifá dit : la fièvre entra dans le village d'Oturupon. On lui dit d'offrir des \
             haricots grillés et de la bière de maïs à Babaluaye. Il fit l'offrande, et la \
             fièvre passa devant sa porte sans entrer.",
            "Ifá dit : Oturupon portait son enfant sur son dos à travers le désert. Ses forces \
             l'abandonnaient. La terre elle-même fit jaillir une source sous ses pieds.",
            "Ifá dit : un homme riche se moqua d'un mendiant couvert de plaies. Le mendiant \
             était Babaluaye, et l'homme riche ne guérit qu'après avoir lavé ses pieds.",
        ],
        prescriptions: "Offrir des haricots grillés et de la bière de maïs à Babaluaye, faire \
                        don de nourriture aux malades et se frotter le corps de maïs grillé.",
        interdictions: "Ne pas balayer la maison après la tombée de la nuit ; ne pas se moquer \
                        d'un malade ; ne pas boire d'eau de pluie recueillie le jour même.",
    },
    MejiText {
        figure: Figure::Otura,
        meaning: "Otura Meji est la paix de l'esprit, la sagesse venue de loin et l'harmonie \
                  entre les peuples. Il annonce des rencontres heureuses, des voyages, la \
                  réconciliation et la vérité qui triomphe du mensonge. Le consultant est \
                  invité à la sérénité : ce qu'il cherche viendra à lui s'il cesse de courir.",
        proverbs: &[
            "La colombe ne se bat pas pour le grain, elle attend que la main l'offre.",
            "La vérité voyage lentement, mais elle arrive toujours.",
            "Celui qui apporte la paix n'a pas besoin d'escorte.",
            "Le marché est bon quand les voisins se saluent.",
        ],
        verses: &[
            "Ifá dit : deux villages étaient en guerre depuis sept générations. Otura traversa \
             la rivière avec du lait et des gâteaux de riz. Il partagea le repas avec les deux \
             chefs, et la guerre prit fin.",
            "Ifá dit : un étranger vint au village avec un livre que personne ne savait lire. \
             Otura l'accueillit dans sa maison, et l'étranger lui en enseigna la sagesse.",
            "Ifá dit : Otura fut accusé de vol devant le roi. Il ne dit rien. Le voleur, ne \
             supportant plus son silence, avoua lui-même sa faute.",
        ],
        prescriptions: "Offrir du lait et des gâteaux de riz à Orunmila, porter du blanc, prier à \
                        l'aube et accueillir un voyageur sous son toit.",
        interdictions: "Ne pas mentir devant un témoin ; ne pas consommer de viande de porc ; ne \
                        pas refuser l'hospitalité.",
    },
    MejiText {
        figure: Figure::Irete,
        meaning: "Irete Meji est la ténacité, la terre qu'on retourne et qui nourrit celui qui \
                  l'a travaillée. Il annonce une victoire obtenue à force de persévérance, la \
                  protection d'Onile, la mère-terre, et la fin d'une longue lutte contre des \
                  ennemis ou une maladie. Ce qui semble écrasé sous le pied se relève.",
        proverbs: &[
            "L'herbe piétinée se redresse après la pluie.",
            "La terre rend au centuple ce qu'on lui confie.",
            "Celui qui tient la houe ne manque pas d'ignames.",
            "La tortue arrive au marché avant le lièvre qui s'est endormi.",
        ],
        verses: &[
            "Ifá dit : les ennemis d'Irete l'enterrèrent vivant. Il avait offert des ignames et \
             un escargot à Onile. La terre s'ouvrit doucement, et il ressortit au matin, plus \
             vigoureux qu'avant.",
            "Ifá dit : Irete labourait un champ de pierres que tous croyaient stérile. Trois \
             saisons durant, il ne récolta rien. À la quatrième, son grenier déborda.",
            "Ifá dit : la mort vint trois fois chercher Irete. Trois fois, il la reçut avec \
             politesse et lui offrit à manger. La troisième fois, elle repartit rassasiée et \
             l'oublia.",
        ],
        prescriptions: "Offrir des ignames et un escargot à Onile, travailler la terre de ses \
                        propres mains et verser de l'eau fraîche sur le sol chaque matin.",
        interdictions: "Ne pas frapper le sol avec colère ; ne pas vendre la terre de ses \
                        ancêtres ; ne pas abandonner une œuvre commencée.",
    },
    MejiText {
        figure: Figure::Ose,
        meaning: "Ose Meji est la douceur qui l'emporte sur la force, la fertilité et la \
                  victoire sur les ennemis. Il annonce l'amour, l'abondance, la naissance \
                  d'enfants et la protection d'Osun, dont les eaux douces guérissent. Le \
                  consultant triomphera par la grâce plutôt que par la lutte.",
        proverbs: &[
            "L'eau douce use la pierre la plus dure.",
            "Le miel attire plus d'abeilles que le vinaigre.",
            "La rivière ne retourne pas à sa source, mais elle nourrit tout ce qu'elle touche.",
            "Celle qui sourit désarme celui qui menace.",
        ],
        verses: &[
            "Ifá dit : lorsque les seize Odu voulurent bâtir le monde sans la femme, rien ne \
             réussit. Ils vinrent offrir du miel et des oranges à Osun, et le monde prit vie.",
            "Ifá dit : Ose était entourée d'ennemis qui voulaient la chasser du marché. Elle \
             leur offrit à chacun un fruit doux. Le lendemain, ils étaient ses meilleurs \
             clients.",
            "Ifá dit : une femme stérile consulta Ifá par Ose. On lui dit de baigner son visage \
             dans la rivière et d'offrir un bracelet de laiton. Neuf mois plus tard, elle \
             portait des jumeaux.",
        ],
        prescriptions: "Offrir du miel, des oranges et un bracelet de laiton à Osun, se baigner \
                        dans une rivière et porter du jaune le jour de l'offrande.",
        interdictions: "Ne pas se moquer d'une femme enceinte ; ne pas souiller une source ; ne \
                        pas manger de canard.",
    },
    MejiText {
        figure: Figure::Ofun,
        meaning: "Ofun Meji est la pureté, le blanc de l'efun et la bénédiction des anciens. \
                  Dernier des Meji, il referme le cycle et touche à l'origine : il annonce la \
                  guérison par la parole, la longévité, la faveur d'Obatala et les miracles \
                  réservés à ceux qui gardent leur cœur propre. Il exige l'honnêteté absolue.",
        proverbs: &[
            "Le blanc ne se salit pas dans la main de celui qui est propre.",
            "La dernière pluie de la saison est la plus douce.",
            "La parole des anciens est un remède qui ne s'achète pas.",
            "Ce qui est pur n'a pas besoin de crier pour être vu.",
        ],
        verses: &[
            "Ifá dit : Ofun était le plus jeune des seize Odu, et les autres refusaient de lui \
             laisser une place. Il offrit de l'efun, du coton et des escargots à Obatala. \
             Obatala le prit sur ses genoux, et tous durent le saluer.",
            "Ifá dit : une épidémie frappa la ville. Ofun parla aux malades, les couvrit de \
             craie blanche, et ils guérirent les uns après les autres.",
            "Ifá dit : Ofun trouva un sac d'or sur la route et le rapporta au roi. Le roi, qui \
             l'avait laissé là pour éprouver son peuple, fit d'Ofun son conseiller.",
        ],
        prescriptions: "Offrir de l'efun, du coton et des escargots à Obatala, se vêtir de blanc \
                        et tracer un cercle de craie sur le seuil de la maison.",
        interdictions: "Ne pas boire de vin de palme ; ne pas porter de vêtements sombres lors \
                        des rites ; ne pas garder ce qui ne vous appartient pas.",
    },
];

impl MejiText {
    /// The authored text of a principal Odu.
    pub fn of(figure: Figure) -> &'static Self {
        &MEJI[figure.seniority()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::figure::TRADITIONAL_ORDER;
    use std::collections::HashSet;

    #[test]
    fn test_meji_follow_traditional_order() {
        for (text, figure) in MEJI.iter().zip(TRADITIONAL_ORDER) {
            assert_eq!(text.figure, figure);
        }
    }

    #[test]
    fn test_meji_content_shape() {
        for text in &MEJI {
            assert!(text.proverbs.len() > 3, "{}", text.figure);
            assert_eq!(text.verses.len(), 3, "{}", text.figure);
            assert!(text.meaning.contains(text.figure.name()));
        }
    }

    #[test]
    fn test_meji_meanings_are_distinct() {
        let meanings: HashSet<&str> = MEJI.iter().map(|t| t.meaning).collect();
        assert_eq!(meanings.len(), 16);
    }
}
