// 📋 Static Fallback Menu
// Shown whenever the sheet is not configured or cannot be read, so the page
// is never empty.

use crate::menu::MenuItem;

/// (category, name, price, description)
type Row = (&'static str, &'static str, &'static str, &'static str);

/// Build the fallback menu. Ids are 1-based positions in the table.
pub fn fallback_menu() -> Vec<MenuItem> {
    FALLBACK_ROWS
        .iter()
        .enumerate()
        .map(|(i, &(category, name, price, description))| {
            MenuItem::new(i + 1, category, name, price, description)
        })
        .collect()
}

const FALLBACK_ROWS: &[Row] = &[
    // A l’hora del Vermut
    ("A l’hora del Vermut", "Vermut de Cercs negre Macarrilla", "4,00 €", ""),
    ("A l’hora del Vermut", "Vermut de Cercs blanc Macarrilla", "4,00 €", ""),
    ("A l’hora del Vermut", "Vermut de Cercs de taronja Macarrilla", "4,00 €", ""),
    ("A l’hora del Vermut", "Martini blanc o negre", "3,50 €", ""),
    ("A l’hora del Vermut", "Vermut de Reus Iris", "4,50 €", ""),
    ("A l’hora del Vermut", "Aperol spritz", "8,00 €", ""),
    ("A l’hora del Vermut", "Bossa de patates lays", "1,60 €", ""),
    ("A l’hora del Vermut", "Olives farcides", "4,00 €", ""),
    ("A l’hora del Vermut", "Escopinyes", "8,50 €", ""),
    ("A l’hora del Vermut", "Musclos", "5,70 €", ""),
    ("A l’hora del Vermut", "Navalles", "6,90 €", ""),

    // Tapes
    ("Tapes", "Nachos amb formatge cheddar", "4,00 €", ""),
    ("Tapes", "Nachos amb guacamole", "4,00 €", ""),
    ("Tapes", "Nachos amb guacamole i cheddar", "5,00 €", ""),
    ("Tapes", "Formatge semi curat", "8,50 €", ""),
    ("Tapes", "Pernil ibèric i pa amb tomàquet", "12,00 €", ""),
    ("Tapes", "Tendal d’anxoves (6 unitats)", "10,00 €", ""),
    ("Tapes", "Combo de crispy tender", "12,00 €", ""),
    ("Tapes", "Combo aletes de pollastre a l’estil KFC", "12,00 €", ""),
    ("Tapes", "Calamars a la Romana", "8,50 €", ""),
    ("Tapes", "Patates braves", "4,70 €", ""),
    ("Tapes", "Les braves de la Joana de l’antic Frankfurt Gironella", "6,00 €", ""),
    ("Tapes", "Patates braves de l’Oriol Rovira dels Casals", "6,00 €", ""),
    ("Tapes", "Patates fregides", "3,50 €", ""),
    ("Tapes", "Pop de muntanya a la gallega", "7,00 €", ""),
    ("Tapes", "Anelles de ceba", "6,00 €", ""),
    ("Tapes", "Fingers de pollastre", "6,00 €", ""),
    ("Tapes", "Tapa de llonganissa", "7,00 €", ""),
    ("Tapes", "Croquetes de rostit (5 unitats)", "6,00 €", ""),
    ("Tapes", "Nugget de pollastre", "6,30 €", ""),
    ("Tapes", "Pa bao amb roast beef i salsa parrilla", "3,00 €/u.", ""),
    ("Tapes", "Aletes de pollastre", "5,80 €", ""),
    ("Tapes", "Pintxos de casa Figols amb patates", "9,00 €", ""),

    // Amanides
    ("Amanides", "Amanida de formatge de cabra", "9,00 €", ""),
    ("Amanides", "Amanida verda amb tonyina", "7,50 €", ""),

    // Plats Combinats
    ("Plats Combinats", "Cal Bassacs", "12,50 €", "Sípia amb patates fregides i amanida"),
    ("Plats Combinats", "Gironella", "10,50 €", "Ous, bacó, patates"),
    ("Plats Combinats", "Cal Blau", "11,50 €", "4 talls de llom a la planxa, 3 croquetes de rostit, patates i allioli"),
    ("Plats Combinats", "Cal Ramons", "13,50 €", "Bistec de vedella amb patates i amanida"),
    ("Plats Combinats", "Viladomiu Nou", "13,50 €", "Calamars a la romana, amanida amb formatge de cabra, escalivada, patates"),
    ("Plats Combinats", "Viladomiu Vell", "10,50 €", "Hamburguesa mixta, ou, bacó i patates"),
    ("Plats Combinats", "La Font dels Torracs", "18,00 €", "Entrecot de vedella amb escalivada i patates"),
    ("Plats Combinats", "Cap del Pla", "10,50 €", "Botifarra amb ous ferrats i patates"),
    ("Plats Combinats", "Barri Vell", "10,50 €", "Pit de pollastre a la planxa, escalivada i amanida"),

    // Plats
    ("Plats", "Costella de porc a baixa temperatura", "15,00 €", ""),
    ("Plats", "Taula d’embotits", "19,00 €", ""),
    ("Plats", "Callos", "8,00 €", ""),
    ("Plats", "Risotto de bolets", "8,00 €", ""),
    ("Plats", "Mandonguilles amb tomàquet", "7,80 €", ""),
    ("Plats", "Burrito de pollastre, guacamole i llima", "7,00 €", ""),

    // Hamburgueses
    ("Hamburgueses", "Hamburguesa de pollastre amb cornflake", "5,60 €", "Pa Rodó"),
    ("Hamburgueses", "Hamburguesa moruna", "5,20 €", "Pa Rodó"),
    ("Hamburgueses", "Hamburguesa picant", "5,20 €", "Pa Rodó"),
    ("Hamburgueses", "Hamburguesa clàssica", "5,20 €", "Pa Rodó"),
    ("Hamburgueses", "Hamburguesa vegana", "5,20 €", "Pa Rodó"),
    ("Hamburgueses", "Hamburguesa de pollastre", "5,20 €", "Pa Rodó"),
    ("Hamburgueses", "Hamburguesa BLACK ANGUSS", "8,70 €", "Pa Rodó"),
    ("Hamburgueses", "Extra: Bacon", "1,00 €", ""),
    ("Hamburgueses", "Extra: Formatge", "0,80 €", ""),
    ("Hamburgueses", "Extra: Form. cabra", "1,80 €", ""),
    ("Hamburgueses", "Extra: Pernil dolç", "0,60 €", ""),
    ("Hamburgueses", "Extra: Ceba", "0,70 €", ""),
    ("Hamburgueses", "Extra: Ou ferrat", "1,20 €", ""),
    ("Hamburgueses", "Extra: Enciam", "0,60 €", ""),
    ("Hamburgueses", "Extra: Pernil salat", "1,80 €", ""),
    ("Hamburgueses", "Extra: Pebrot", "0,70 €", ""),
    ("Hamburgueses", "Extra: Tomaquet", "0,60 €", ""),
    ("Hamburgueses", "Extra: Tonyina", "1,30 €", ""),
    ("Hamburgueses", "Extra: Salsa", "1,00 €", ""),

    // Frankfurt
    ("Frankfurt", "Frankfurt", "3,80 € / 4,80 €", "Pa de Frankfurt / Pa de barra"),
    ("Frankfurt", "Frankfurt picant", "3,80 € / 4,80 €", "Pa de Frankfurt / Pa de barra"),
    ("Frankfurt", "Cervela", "3,90 € / 4,70 €", "Pa de Frankfurt / Pa de barra"),
    ("Frankfurt", "Bratwurst", "3,90 € / 4,70 €", "Pa de Frankfurt / Pa de barra"),
    ("Frankfurt", "Bikini", "4,20 € / 5,60 €", "Pa de Frankfurt / Pa de barra"),
    ("Frankfurt", "Bikini pernil salat", "4,60 € / 6,00 €", "Pa de Frankfurt / Pa de barra"),
    ("Frankfurt", "Bikini tonyina", "4,70 €", ""),
    ("Frankfurt", "Bikini de pernil ibèric", "6,70 €", ""),
    ("Frankfurt", "Bikini de pernil i bacó", "5,30 €", ""),
    ("Frankfurt", "Bikini de formatge", "5,10 €", ""),

    // Entrepans Calents
    ("Entrepans Calents", "Bacó", "3,50 € / 4,80 €", "Pa de Frankfurt / Pa de barra"),
    ("Entrepans Calents", "Llom", "3,60 € / 4,90 €", "Pa de Frankfurt / Pa de barra"),
    ("Entrepans Calents", "Salsitxa país", "3,50 € / 4,80 €", "Pa de Frankfurt / Pa de barra"),
    ("Entrepans Calents", "Botifarra de la casa", "3,80 € / 4,90 €", "Pa de Frankfurt / Pa de barra"),
    ("Entrepans Calents", "Salsitxa moruna", "3,40 € / 3,60 €", "Pa de Frankfurt / Pa de barra"),
    ("Entrepans Calents", "Botifarra negre", "3,60 € / 5,60 €", "Pa de Frankfurt / Pa de barra"),
    ("Entrepans Calents", "Pit de pollastre", "3,50 € / 4,70 €", "Pa de Frankfurt / Pa de barra"),
    ("Entrepans Calents", "Truita francesa", "3,40 € / 4,70 €", "Pa de Frankfurt / Pa de barra"),
    ("Entrepans Calents", "Serranito", "4,70 € / 6,90 €", "Pa de Frankfurt / Pa de barra"),
    ("Entrepans Calents", "Cansalada", "3,70 € / 5,70 €", "Pa de Frankfurt / Pa de barra"),
    ("Entrepans Calents", "Xistorra", "3,60 € / 4,60 €", "Pa de Frankfurt / Pa de barra"),
    ("Entrepans Calents", "Vegetal de pollastre", "7,30 €", ""),
    ("Entrepans Calents", "Vegetal de tonyina", "7,30 €", ""),
    ("Entrepans Calents", "Pintxo de Casa Figols", "3,70 € / 5,30 €", ""),

    // Entrepans Freds
    ("Entrepans Freds", "Llonganissa", "3,40 € / 4,80 €", "Pa de Frankfurt / Pa de barra"),
    ("Entrepans Freds", "Pernil salat de bodega", "3,80 € / 4,90 €", "Pa de Frankfurt / Pa de barra"),
    ("Entrepans Freds", "Pernil ibèric", "5,80 € / 8,50 €", "Pa de Frankfurt / Pa de barra"),
    ("Entrepans Freds", "Pernil dolç", "3,80 € / 4,50 €", "Pa de Frankfurt / Pa de barra"),
    ("Entrepans Freds", "Bull blanc", "3,80 € / 4,70 €", "Pa de Frankfurt / Pa de barra"),
    ("Entrepans Freds", "Formatge crema", "3,40 € / 4,70 €", "Pa de Frankfurt / Pa de barra"),
    ("Entrepans Freds", "Anxoves 6u", "9,00 €", ""),
    ("Entrepans Freds", "Tonyina", "3,60 € / 5,00 €", "Pa de Frankfurt / Pa de barra"),
    ("Entrepans Freds", "Xoriç", "3,20 € / 4,20 €", "Pa de Frankfurt / Pa de barra"),

    // Torrades
    ("Torrades", "Torrada de bacó amb formatge", "7,30 €", ""),
    ("Torrades", "Torrada de botifarra", "7,30 €", ""),
    ("Torrades", "Torrada de llom i formatge", "7,50 €", ""),
    ("Torrades", "Torrada de pernil ibèric", "11,00 €", ""),
    ("Torrades", "Torrada de pernil salat de bodega", "7,50 €", ""),
    ("Torrades", "Torrada d’escalivada amb anxoves", "9,00 €", ""),
    ("Torrades", "Torrada de truita de patates amb ceba", "7,50 €", ""),
    ("Torrades", "Torrada de cansalada", "7,50 €", ""),
    ("Torrades", "Torrada d’anxoves (6 unitats)", "9,50 €", ""),
    ("Torrades", "Torrada de truita francesa", "6,50 €", ""),
    ("Torrades", "Torrada de tonyina", "8,00 €", ""),

    // Postres
    ("Postres", "Coulant de xocolata", "4,60 €", ""),
    ("Postres", "Coulant de xocolata blanca", "4,60 €", ""),
    ("Postres", "Pastís Lotus", "5,00 €", ""),
    ("Postres", "Pastís de formatge", "4,60 €", ""),
    ("Postres", "Púding casolà", "4,60 €", ""),
    ("Postres", "Trufes de xocolata amb nata", "4,50 €", ""),
    ("Postres", "Crep de xocolata", "4,80 €", ""),
    ("Postres", "Mousse de llimona", "4,50 €", ""),
    ("Postres", "Bikini de Nutella", "4,50 €", ""),

    // Cafès
    ("Cafès", "Cafè", "1,35 €", ""),
    ("Cafès", "Tallat", "1,45 €", "Llet avena, llet sense lactosa"),
    ("Cafès", "Tallat condensada", "1,45 €", ""),
    ("Cafès", "Cafè amb llet", "1,60 €", ""),
    ("Cafès", "Cafè amb llet beguda de civada/soja", "1,70 €", ""),
    ("Cafès", "Cigaló de conyac", "2,00 €", ""),
    ("Cafès", "Cigaló de whisky", "2,60 €", ""),
    ("Cafès", "Cigaló d’anís", "2,00 €", ""),
    ("Cafès", "Capuccino", "1,80 €", ""),
    ("Cafès", "Cafè vienès", "2,20 €", ""),
    ("Cafès", "Trifàsic de conyac", "2,00 €", ""),
    ("Cafès", "Trifàsic de whisky", "2,10 €", ""),
    ("Cafès", "Trifàsic d’anís", "1,90 €", ""),
    ("Cafès", "Cafè descafeïnat", "1,30 €", ""),
    ("Cafès", "Tallat descafeïnat de màquina", "1,40 €", ""),
    ("Cafès", "Tallat descafeïnat de sobre", "1,40 €", ""),
    ("Cafès", "Cola cao", "1,70 €", ""),
    ("Cafès", "Got de llet", "1,40 €", ""),
    ("Cafès", "Cafè amb llet XL", "1,80 €", ""),
    ("Cafès", "Infusions", "1,50 €", ""),
    ("Cafès", "Cacaolat (Cafeteria)", "2,30 €", ""),
    ("Cafès", "Cafè americà", "1,40 €", ""),
    ("Cafès", "Cafè doble", "1,60 €", ""),
    ("Cafès", "Cafè irlandès", "6,00 €", ""),

    // Vins
    ("Vins", "Ampolla vi de la casa (Blanc)", "1,90 € / 7,00 €", "Copa / Ampolla"),
    ("Vins", "Marieta (albariño)", "3,50 € / 16,00 €", "Copa / Ampolla"),
    ("Vins", "Alba d’Abadal (Pla de Bages)", "3,00 € / 15,00 €", "Copa / Ampolla"),
    ("Vins", "Quinta de Couselo (o rosal)", "3,50 € / 16,00 €", "Copa / Ampolla"),
    ("Vins", "Ampolla vi de la casa (Negre)", "1,90 € / 7,00 €", "Copa / Ampolla"),
    ("Vins", "Gran foc (Penedès)", "3,00 € / 16,00 €", "Copa / Ampolla"),
    ("Vins", "Cillar de Silos (Ribera del Duero)", "3,50 € / 16,00 €", "Copa / Ampolla"),
    ("Vins", "Vallobera criança (Rioja)", "3,50 € / 16,00 €", "Copa / Ampolla"),
    ("Vins", "Sangria de cava", "13,50 €", ""),
    ("Vins", "Sangria de vi", "11,00 €", ""),

    // Cerveses
    ("Cerveses", "Cervesa de llauna", "2,00 €", ""),
    ("Cerveses", "Cervesa sense gluten", "2,20 €", ""),
    ("Cerveses", "1906 black", "2,55 €", ""),
    ("Cerveses", "Galicia torrada", "2,05 €", ""),
    ("Cerveses", "Cervesa 0,0", "2,05 €", ""),
    ("Cerveses", "Mitjana estrella galicia", "1,85 €", ""),
    ("Cerveses", "Zurito cervesa", "1,55 €", ""),
    ("Cerveses", "Copa torrada 0,0", "2,10 €", ""),
    ("Cerveses", "Copa de cervesa estrella galicia", "1,90 €", ""),
    ("Cerveses", "Copa de cervesa 1906", "2,10 €", ""),
    ("Cerveses", "Canya petita estrella galicia", "1,55 €", ""),
    ("Cerveses", "Canya petita 1906", "1,90 €", ""),
    ("Cerveses", "Canya torrada 0,0", "2,00 €", ""),
    ("Cerveses", "Clara copa", "2,20 €", ""),
    ("Cerveses", "Canya clara petita", "1,80 €", ""),
    ("Cerveses", "Radler llimona", "2,05 €", ""),
    ("Cerveses", "Gerra petita cervesa", "2,25 €", ""),
    ("Cerveses", "Gerra petita clara", "2,35 €", ""),
    ("Cerveses", "Gerra petita torrada", "2,35 €", ""),
    ("Cerveses", "Gerra petita 1906", "2,55 €", ""),
    ("Cerveses", "Gerra mig clara", "3,00 €", ""),
    ("Cerveses", "Gerra gran cervesa", "3,45 €", ""),
    ("Cerveses", "Gerra gran clara", "3,25 €", ""),
    ("Cerveses", "Gerra gran torrada", "3,35 €", ""),
    ("Cerveses", "Gerra gran 1906", "3,80 €", ""),
    ("Cerveses", "Quinto d’estrella galicia", "1,70 €", ""),

    // Refrescos Llauna
    ("Refrescos Llauna", "Coca cola", "2,00 €", ""),
    ("Refrescos Llauna", "Coca cola zero", "2,00 €", ""),
    ("Refrescos Llauna", "Fanta de taronja", "2,00 €", ""),
    ("Refrescos Llauna", "Fanta de llimona", "2,00 €", ""),
    ("Refrescos Llauna", "Aquarius", "2,00 €", ""),
    ("Refrescos Llauna", "Nestea", "2,00 €", ""),
    ("Refrescos Llauna", "Sprite", "2,00 €", ""),
    ("Refrescos Llauna", "Pepsi llauna", "2,00 €", ""),
    ("Refrescos Llauna", "Pepsi 35 cl", "2,20 €", ""),
    ("Refrescos Llauna", "Kas 35 cl", "2,20 €", ""),
    ("Refrescos Llauna", "Trina taronja", "2,00 €", ""),
    ("Refrescos Llauna", "Trina poma", "2,00 €", ""),
    ("Refrescos Llauna", "Aquarade", "2,00 €", ""),
    ("Refrescos Llauna", "Aigua Cabreiroá 50 cl", "1,50 €", ""),
    ("Refrescos Llauna", "Aigua Cabreiroá 1,5 l", "2,50 €", ""),
    ("Refrescos Llauna", "Royal bliss", "1,90 €", ""),
    ("Refrescos Llauna", "Vichy", "1,85 €", ""),

    // Refrescos i Varis
    ("Refrescos i Varis", "Cacaolat", "2,40 €", ""),
    ("Refrescos i Varis", "Coca cola 237 ml", "1,80 €", ""),
    ("Refrescos i Varis", "Bitter kas", "2,50 €", ""),
    ("Refrescos i Varis", "Sucs", "1,70 €", ""),
    ("Refrescos i Varis", "Gaseosa de 1/2", "1,80 €", ""),

    // Gin Tonics
    ("Gin Tonics", "Seagrams amb tònica", "7,00 €", ""),
    ("Gin Tonics", "Beefeater amb tònica", "7,00 €", ""),
    ("Gin Tonics", "Gvine amb tònica", "8,50 €", ""),
    ("Gin Tonics", "Bombay amb tònica", "7,00 €", ""),
    ("Gin Tonics", "Bulldog amb tònica", "8,50 €", ""),
    ("Gin Tonics", "Puertos de indias amb tònica", "7,00 €", ""),

    // Ron
    ("Ron", "Ron bacardi amb cola", "6,00 €", ""),
    ("Ron", "Ron havanna 7 amb cola", "8,00 €", ""),
    ("Ron", "Ron barceló amb cola", "7,00 €", ""),

    // Licors
    ("Licors", "Anís", "2,30 € / 1,50 €", "Copa / Raig / Tub Gel / Xarrup"),
    ("Licors", "Magno", "2,50 € / 1,20 €", ""),
    ("Licors", "Veterano", "2,50 € / 1,20 €", ""),
    ("Licors", "JB", "2,70 € / 1,60 € / 3,70 € / 2,00 €", ""),
    ("Licors", "Ballantines", "3,00 € / 1,50 € / 4,50 € / 2,00 €", ""),
    ("Licors", "Baileys", "3,00 € / 1,50 € / 3,50 € / 2,00 €", ""),
    ("Licors", "Crema orujo", "3,00 € / 1,50 € / 4,00 € / 2,00 €", ""),
    ("Licors", "Licor herbes", "3,00 € / 1,50 € / 3,75 € / 2,00 €", ""),
    ("Licors", "Licor poma i préssec", "2,00 € / 1,50 € / 3,75 € / 2,00 €", ""),
];
