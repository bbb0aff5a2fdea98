//! PDF417 and MicroPDF417 bar patterns.
//!
//! Each entry packs the element widths of one pattern as 3-bit fields, most
//! significant (leftmost element) first: eight elements for a codeword, six
//! for a row address pattern.

/// Codeword patterns for clusters 0, 3 and 6
pub(crate) static BAR_DATA: [[u32; 929]; 3] = [
    [
        6591070, 8688228, 10785386, 6591133, 8688291, 10785449, 4494038, 6591196,
        4494101, 2397006, 4494164, 2397069, 4494430, 6591588, 8688746, 4494493,
        6591651, 8688809, 2397398, 4494556, 2397461, 2397790, 4494948, 6592106,
        2397853, 4495011, 6592169, 2397916, 4495074, 2398308, 4495466, 2398371,
        4495529, 2398826, 10787913, 6595165, 8692323, 10789481, 4498070, 6595228,
        8692386, 4498133, 6595291, 2401038, 4498196, 6595354, 2401101, 4498259,
        2401164, 4498525, 6595683, 8692841, 2401430, 4498588, 6595746, 2401493,
        4498651, 6595809, 2401556, 4498714, 2401885, 4499043, 6596201, 2401948,
        4499106, 2402011, 4499169, 2402403, 4499561, 2402466, 2402529, 4502102,
        6599260, 8696418, 4502165, 6599323, 8696481, 2405070, 4502228, 6599386,
        2405133, 4502291, 2405196, 2405259, 2405462, 4502620, 6599778, 2405525,
        4502683, 6599841, 2405588, 4502746, 2405651, 2405714, 2405980, 4503138,
        2406043, 4503201, 2406106, 2406498, 4506197, 6603355, 8700513, 2409102,
        4506260, 6603418, 2409165, 4506323, 6603481, 2409228, 4506386, 2409291,
        4506449, 2409557, 4506715, 6603873, 2409620, 4506778, 2409683, 4506841,
        2409746, 2409809, 4507233, 2410201, 2413134, 4510292, 6607450, 2413197,
        4510355, 6607513, 2413260, 4510418, 2413323, 4510481, 2413386, 2413652,
        2413715, 2413778, 2417229, 6611545, 4514450, 4514513, 2417481, 6853213,
        8950371, 11047529, 4756118, 6853276, 8950434, 4756181, 6853339, 8950497,
        2659086, 4756244, 2659149, 4756573, 6853731, 8950889, 2659478, 4756636,
        6853794, 2659541, 4756699, 2659604, 2659667, 2659933, 4757091, 6854249,
        2659996, 4757154, 2660059, 2660122, 2660451, 4757609, 2660514, 2660969,
        6623830, 8720988, 10818146, 6623893, 8721051, 10818209, 4526798, 6623956,
        8721114, 4526861, 6624019, 8721177, 4526924, 6624082, 4760150, 6857308,
        8954466, 4527190, 4760213, 6857371, 8954529, 4527253, 6624411, 8721569,
        2430158, 2663181, 4760339, 6857497, 2430221, 4527379, 2430284, 2663510,
        4760668, 6857826, 2430550, 2663573, 4760731, 6857889, 2430613, 4527771,
        6624929, 2430676, 2663699, 2430739, 2664028, 4761186, 2431068, 2664091,
        4761249, 2431131, 4528289, 2431194, 2664546, 2431586, 2664609, 2431649,
        6627925, 8725083, 10822241, 4530830, 6627988, 8725146, 4530893, 6628051,
        8725209, 4530956, 6628114, 4531019, 4531082, 4764245, 6861403, 8958561,
        4531285, 4764308, 6861466, 2434190, 2667213, 6628506, 6861529, 2434253,
        2667276, 4764434, 2434316, 4531474, 4764497, 2667402, 2667605, 4764763,
        6861921, 2434645, 2667668, 4764826, 2434708, 4531866, 4764889, 2434771,
        2667794, 2667857, 2668123, 4765281, 2435163, 2668186, 2435226, 2668249,
        2435289, 2435681, 4534862, 6632020, 8729178, 4534925, 6632083, 8729241,
        4534988, 6632146, 4535051, 6632209, 4535114, 4535177, 2671182, 4768340,
        6865498, 2438222, 2671245, 4768403, 6865561, 2438285, 4535443, 6632601,
        2438348, 2671371, 4768529, 2438411, 4535569, 2438474, 2671700, 4768858,
        2438740, 2671763, 4768921, 2438803, 4535961, 2438866, 2671889, 2438929,
        2439258, 2439321, 4538957, 6636115, 8733273, 4539020, 6636178, 4539083,
        6636241, 4539146, 4539209, 2675277, 4772435, 6869593, 2442317, 2675340,
        4772498, 2442380, 4539538, 4772561, 2442443, 2675466, 2442506, 2675529,
        2675795, 2442835, 2442898, 2442961, 6640210, 6640273, 4543241, 4776530,
        2679435, 2446475, 2446538, 2446601, 5018198, 7115356, 9212514, 5018261,
        7115419, 2921166, 5018324, 7115482, 2921229, 5018387, 2921292, 2921355,
        2921558, 5018716, 7115874, 2921621, 5018779, 7115937, 2921684, 5018842,
        2921747, 2921810, 2922076, 5019234, 2922139, 5019297, 2922202, 2922594,
        2922657, 6885973, 8983131, 11080289, 4788878, 6886036, 8983194, 4788941,
        6886099, 8983257, 4789004, 6886162, 4789067, 6886225, 5022293, 7119451,
        9216609, 4789333, 5022356, 7119514, 2692238, 2925261, 6886554, 7119577,
        2692301, 4789459, 5022482, 2692364, 2925387, 2692427, 2925653, 5022811,
        7119969, 2692693, 2925716, 6887009, 2692756, 4789914, 5022937, 2692819,
        2925842, 2692882, 2926171, 5023329, 2693211, 2926234, 2693274, 2926297,
        2926689, 2693729, 6656590, 8753748, 10850906, 6656653, 8753811, 10850969,
        6656716, 8753874, 6656779, 8753937, 6656842, 4792910, 6890068, 8987226,
        4559950, 4792973, 8754266, 8987289, 4560013, 6657171, 8754329, 4560076,
        4793099, 6890257, 4560139, 6657297, 4793225, 2929230, 5026388, 7123546,
        2696270, 2929293, 5026451, 7123609, 2463310, 2696333, 4793491, 6890649,
        2463373, 4560531, 6657689, 5026577, 2463436, 2696459, 4793617, 2463499,
        2929545, 2929748, 5026906, 2696788, 2929811, 5026969, 2463828, 2696851,
        4794009, 2463891, 4561049, 2929937, 2696977, 2930266, 2697306, 2930329,
        2464346, 2697369, 6660685, 8757843, 10855001, 6660748, 8757906, 6660811,
        8757969, 6660874, 6660937, 4797005, 6894163, 8991321, 4564045, 4797068,
        8758361, 4564108, 6661266, 6894289, 4564171, 4797194, 4564234, 4797257,
        4564297, 2933325, 5030483, 7127641, 2700365, 2933388, 5030546, 2467405,
        2700428, 4797586, 5030609, 2467468, 4564626, 2933514, 2467531, 2700554,
        2933577, 2700617, 2933843, 5031001, 2700883, 2933906, 2467923, 2700946,
        2933969, 2467986, 2701009, 2934361, 2468441, 6664780, 8761938, 6664843,
        8762001, 6664906, 6664969, 4801100, 6898258, 4568140, 4801163, 6898321,
        4568203, 6665361, 4568266, 4801289, 4568329, 2937420, 5034578, 2704460,
        2937483, 5034641, 2471500, 2704523, 4801681, 2471563, 4568721, 2937609,
        2471626, 2704649, 2471689, 2704978, 2472018, 2472081, 8766033, 6669001,
        6902353, 4805258, 4805321, 2941515, 2708555, 2475595, 2941641, 2708681,
        5280341, 3183246, 5280404, 3183309, 5280467, 7377625, 3183372, 5280530,
        3183435, 5280593, 3183701, 5280859, 7378017, 3183764, 5280922, 3183827,
        5280985, 3183890, 3183953, 3184219, 5281377, 3184282, 3184345, 3184737,
        5050958, 7148116, 9245274, 5051021, 7148179, 5051084, 7148242, 5051147,
        7148305, 5051210, 3187278, 5284436, 7381594, 2954318, 3187341, 7148634,
        7381657, 2954381, 5051539, 7148697, 2954444, 3187467, 5284625, 2954507,
        5051665, 3187593, 3187796, 5284954, 2954836, 3187859, 5285017, 2954899,
        5052057, 2954962, 3187985, 3188314, 2955354, 3188377, 2955417, 6918733,
        9015891, 11113049, 6918796, 9015954, 6918859, 9016017, 6918922, 6918985,
        5055053, 7152211, 4822093, 5055116, 7152274, 4822156, 6919314, 7152337,
        4822219, 5055242, 4822282, 5055305, 4822345, 3191373, 5288531, 2958413,
        3191436, 7152729, 2725453, 2958476, 5055634, 5288657, 2725516, 4822674,
        3191562, 2725579, 2958602, 3191625, 2958665, 3191891, 5289049, 2958931,
        3191954, 2725971, 2958994, 3192017, 2726034, 2959057, 3192409, 2959449,
        2726489, 8786508, 10883666, 8786571, 10883729, 8786634, 8786697, 6922828,
        9019986, 6689868, 8787026, 9020049, 6689931, 8787089, 6689994, 6923017,
        6690057, 5059148, 7156306, 4826188, 5059211, 7156369, 4593228, 4826251,
        6923409, 4593291, 6690449, 5059337, 4593354, 4826377, 4593417, 3195468,
        5292626, 2962508, 3195531, 5292689, 2729548, 2962571, 5059729, 2496588,
        2729611, 4826769, 3195657, 2496651, 4593809, 2962697, 2496714, 3195986,
        2963026, 3196049, 2730066, 2963089, 2497106, 2730129, 2497169, 8790603,
        10887761, 8790666, 8790729, 6926923, 9024081, 6693963, 8791121, 6694026,
        6927049, 6694089, 5063243, 7160401, 4830283, 5063306, 4597323, 4830346,
        5063369, 4597386, 4830409, 4597449, 3199563, 5296721, 2966603, 5063761,
        2733643, 2966666, 3199689, 2500683, 2733706, 2966729, 2500746, 2733769,
        2500809, 2967121, 2501201, 8794761, 6698058, 6698121, 4834378, 4601418,
        4601481, 2970698, 2737738, 2504778, 2504841, 3445326, 3445389, 5542547,
        3445452, 3445515, 3445578, 3445844, 3445907, 3445970, 3446033, 3446362,
        3446425, 5313101, 5313164, 7410322, 5313227, 7410385, 5313290, 5313353,
        3449421, 5546579, 3216461, 5313619, 5546642, 3216524, 5313682, 3216587,
        5313745, 3216650, 3449673, 3216713, 3449939, 5547097, 3216979, 5314137,
        3217042, 3450065, 3217105, 3450457, 3217497, 7180876, 7180939, 7181002,
        7181065, 5317196, 5084236, 7181394, 7414417, 5084299, 7181457, 5084362,
        5317385, 5084425, 3453516, 3220556, 3453579, 5550737, 2987596, 3220619,
        3453642, 2987659, 3220682, 3453705, 2987722, 3220745, 3454034, 3221074,
        3454097, 2988114, 3221137, 2988177, 9048651, 9048714, 9048777, 7184971,
        6952011, 9049169, 6952074, 7185097, 6952137, 5321291, 7418449, 5088331,
        7185489, 4855371, 5088394, 5321417, 4855434, 5088457, 4855497, 3457611,
        5554769, 3224651, 5321809, 2991691, 3224714, 3457737, 2758731, 2991754,
        3224777, 2758794, 2991817, 3458129, 3225169, 2992209, 2759249, 10916426,
        10916489, 9052746, 8819786, 9052809, 8819849, 7189066, 6956106, 7189129,
        6723146, 6956169, 6723209, 5325386, 5092426, 5325449, 4859466, 5092489,
        4626506,
    ],
    [
        10785365, 12882523, 8688270, 10785428, 12882586, 8688333, 10785491, 12882649,
        8688396, 10785554, 8688459, 10785617, 8688522, 8688725, 10785883, 12883041,
        6591630, 8688788, 10785946, 6591693, 8688851, 10786009, 6591756, 8688914,
        6591819, 8688977, 6591882, 6592085, 8689243, 10786401, 4494990, 6592148,
        8689306, 4495053, 6592211, 8689369, 4495116, 6592274, 4495179, 6592337,
        4495242, 4495445, 6592603, 8689761, 2398350, 4495508, 6592666, 2398413,
        4495571, 6592729, 2398476, 4495634, 2398539, 4495697, 2398805, 4495963,
        6593121, 2398868, 4496026, 2398931, 4496089, 2398994, 2399323, 4496481,
        2399386, 2399449, 8692302, 10789460, 12886618, 8692365, 10789523, 12886681,
        8692428, 10789586, 8692491, 10789649, 8692554, 8692617, 6595662, 8692820,
        10789978, 6595725, 8692883, 10790041, 6595788, 8692946, 6595851, 8693009,
        6595914, 6595977, 4499022, 6596180, 8693338, 4499085, 6596243, 8693401,
        4499148, 6596306, 4499211, 6596369, 4499274, 4499337, 2402382, 4499540,
        6596698, 2402445, 4499603, 6596761, 2402508, 4499666, 2402571, 4499729,
        2402634, 2402900, 4500058, 2402963, 4500121, 2403026, 2403089, 2403418,
        2403481, 8696397, 10793555, 12890713, 8696460, 10793618, 8696523, 10793681,
        8696586, 8696649, 6599757, 8696915, 10794073, 6599820, 8696978, 6599883,
        8697041, 6599946, 6600009, 4503117, 6600275, 8697433, 4503180, 6600338,
        4503243, 6600401, 4503306, 4503369, 2406477, 4503635, 6600793, 2406540,
        4503698, 2406603, 4503761, 2406666, 2406729, 2406995, 4504153, 2407058,
        2407121, 2407513, 8700492, 10797650, 8700555, 10797713, 8700618, 8700681,
        6603852, 8701010, 6603915, 8701073, 6603978, 6604041, 4507212, 6604370,
        4507275, 6604433, 4507338, 4507401, 2410572, 4507730, 2410635, 4507793,
        2410698, 2410761, 2411090, 2411153, 8704587, 10801745, 8704650, 8704713,
        6607947, 8705105, 6608010, 6608073, 4511307, 6608465, 4511370, 4511433,
        2414667, 4511825, 2414730, 2414793, 8708682, 8708745, 6612042, 6612105,
        4515402, 4515465, 8950350, 11047508, 13144666, 8950413, 11047571, 13144729,
        8950476, 11047634, 8950539, 11047697, 8950602, 8950665, 6853710, 8950868,
        11048026, 6853773, 8950931, 11048089, 6853836, 8950994, 6853899, 8951057,
        6853962, 6854025, 4757070, 6854228, 8951386, 4757133, 6854291, 8951449,
        4757196, 6854354, 4757259, 6854417, 4757322, 4757385, 2660430, 4757588,
        6854746, 2660493, 4757651, 6854809, 2660556, 4757714, 2660619, 4757777,
        2660682, 2660948, 4758106, 2661011, 4758169, 2661074, 2661137, 2661466,
        2661529, 10818125, 12915283, 2429556, 10818188, 12915346, 2429619, 10818251,
        12915409, 2429682, 10818314, 10818377, 8954445, 11051603, 13148761, 8721485,
        8954508, 12915801, 8721548, 10818706, 11051729, 8721611, 8954634, 8721674,
        8954697, 8721737, 6857805, 8954963, 11052121, 6624845, 6857868, 8955026,
        6624908, 8722066, 8955089, 6624971, 6857994, 6625034, 6858057, 6625097,
        4761165, 6858323, 8955481, 4528205, 4761228, 6858386, 4528268, 6625426,
        6858449, 4528331, 4761354, 4528394, 4761417, 4528457, 2664525, 4761683,
        6858841, 2431565, 2664588, 4761746, 2431628, 4528786, 4761809, 2431691,
        2664714, 2431754, 2664777, 2665043, 4762201, 2432083, 2665106, 2432146,
        2665169, 2432209, 2665561, 10822220, 12919378, 2433651, 10822283, 12919441,
        2433714, 10822346, 2433777, 10822409, 8958540, 11055698, 8725580, 8958603,
        11055761, 8725643, 10822801, 8725706, 8958729, 8725769, 6861900, 8959058,
        6628940, 6861963, 8959121, 6629003, 8726161, 6629066, 6862089, 6629129,
        4765260, 6862418, 4532300, 4765323, 6862481, 4532363, 6629521, 4532426,
        4765449, 4532489, 2668620, 4765778, 2435660, 2668683, 4765841, 2435723,
        4532881, 2435786, 2668809, 2435849, 2669138, 2436178, 2669201, 2436241,
        10826315, 12923473, 2437746, 10826378, 2437809, 10826441, 8962635, 11059793,
        8729675, 10826833, 8729738, 8962761, 8729801, 6865995, 8963153, 6633035,
        6866058, 6633098, 6866121, 6633161, 4769355, 6866513, 4536395, 6633553,
        4536458, 4769481, 4536521, 2672715, 4769873, 2439755, 2672778, 2439818,
        2672841, 2439881, 2673233, 2440273, 10830410, 2441841, 10830473, 8966730,
        8733770, 8966793, 8733833, 6870090, 6637130, 6870153, 6637193, 4773450,
        4540490, 4773513, 4540553, 2676810, 2443850, 2676873, 2443913, 10834505,
        8970825, 8737865, 6874185, 6641225, 4777545, 4544585, 9212493, 11309651,
        13406809, 9212556, 11309714, 9212619, 11309777, 9212682, 9212745, 7115853,
        9213011, 11310169, 7115916, 9213074, 7115979, 9213137, 7116042, 7116105,
        5019213, 7116371, 9213529, 5019276, 7116434, 5019339, 7116497, 5019402,
        5019465, 2922573, 5019731, 7116889, 2922636, 5019794, 2922699, 5019857,
        2922762, 2922825, 2923091, 5020249, 2923154, 2923217, 2923609, 11080268,
        13177426, 2691699, 11080331, 13177489, 2691762, 11080394, 2691825, 11080457,
        9216588, 11313746, 8983628, 9216651, 11313809, 8983691, 11080849, 8983754,
        9216777, 8983817, 7119948, 9217106, 6886988, 7120011, 9217169, 6887051,
        8984209, 6887114, 7120137, 6887177, 5023308, 7120466, 4790348, 5023371,
        7120529, 4790411, 6887569, 4790474, 5023497, 4790537, 2926668, 5023826,
        2693708, 2926731, 5023889, 2693771, 4790929, 2693834, 2926857, 2693897,
        2927186, 2694226, 2927249, 2694289, 12948043, 2462316, 4559474, 12948106,
        2462379, 4559537, 12948169, 2462442, 2462505, 11084363, 13181521, 2695794,
        10851403, 12948561, 2462834, 2695857, 10851466, 11084489, 2462897, 10851529,
        9220683, 11317841, 8987723, 9220746, 8754763, 10851921, 9220809, 8754826,
        8987849, 8754889, 7124043, 9221201, 6891083, 7124106, 6658123, 6891146,
        7124169, 6658186, 6891209, 6658249, 5027403, 7124561, 4794443, 5027466,
        4561483, 4794506, 5027529, 4561546, 4794569, 4561609, 2930763, 5027921,
        2697803, 2930826, 2464843, 2697866, 2930889, 2464906, 2697929, 2464969,
        2931281, 2698321, 12952138, 2466411, 4563569, 12952201, 2466474, 2466537,
        11088458, 2699889, 10855498, 11088521, 2466929, 10855561, 9224778, 8991818,
        9224841, 8758858, 8991881, 8758921, 7128138, 6895178, 7128201, 6662218,
        6895241, 6662281, 5031498, 4798538, 5031561, 4565578, 4798601, 4565641,
        2934858, 2701898, 2934921, 2468938, 2701961, 2469001, 12956233, 2470506,
        2470569, 11092553, 10859593, 9228873, 8995913, 8762953, 7132233, 6899273,
        6666313, 5035593, 4802633, 4569673, 2938953, 2705993, 2473033, 2474601,
        9474636, 11571794, 9474699, 11571857, 9474762, 9474825, 7377996, 9475154,
        7378059, 9475217, 7378122, 7378185, 5281356, 7378514, 5281419, 7378577,
        5281482, 5281545, 3184716, 5281874, 3184779, 5281937, 3184842, 3184905,
        3185234, 3185297, 11342411, 13439569, 2953842, 11342474, 2953905, 11342537,
        9478731, 11575889, 9245771, 9478794, 9245834, 9478857, 9245897, 7382091,
        9479249, 7149131, 7382154, 7149194, 7382217, 7149257, 5285451, 7382609,
        5052491, 5285514, 5052554, 5285577, 5052617, 3188811, 5285969, 2955851,
        3188874, 2955914, 3188937, 2955977, 3189329, 2956369, 13210186, 2724459,
        4821617, 13210249, 2724522, 2724585, 11346506, 2957937, 11113546, 11346569,
        2724977, 11113609, 9482826, 9249866, 9482889, 9016906, 9249929, 9016969,
        7386186, 7153226, 7386249, 6920266, 7153289, 6920329, 5289546, 5056586,
        5289609, 4823626, 5056649, 4823689, 3192906, 2959946, 3192969, 2726986,
        2960009, 2727049, 2495076, 4592234, 2495139, 4592297, 2495202, 2495265,
        13214281, 2728554, 12981321, 2495594, 2728617, 2495657, 11350601, 11117641,
        10884681, 9486921, 9253961, 9021001, 8788041, 7390281, 7157321, 6924361,
        6691401, 5293641, 5060681, 4827721, 4594761, 3197001, 2964041, 2731081,
        2499171, 4596329, 2499234, 2499297, 2732649, 2499689, 2503266, 2503329,
        2507361, 9736779, 9736842, 9736905, 7640139, 9737297, 7640202, 7640265,
        5543499, 7640657, 5543562, 5543625, 3446859, 5544017, 3446922, 3446985,
        3447377, 11604554, 3215985, 11604617, 9740874, 9507914, 9740937, 9507977,
        7644234, 7411274, 7644297, 7411337, 5547594, 5314634, 5547657, 5314697,
        3450954, 3217994, 3451017, 3218057, 13472329, 2986602, 2986665, 11608649,
        11375689, 9744969, 9512009, 9279049, 7648329, 7415369, 7182409, 5551689,
        5318729, 5085769, 3455049, 3222089, 2989129, 2757219, 4854377, 2757282,
        2757345, 2990697, 2757737, 2527836, 4624994, 2527899, 4625057, 2527962,
        2528025, 2761314, 2528354, 2761377, 2528417, 2531931, 4629089, 2531994,
        2532057, 2765409, 2532449, 2536026, 2536089, 2540121, 7902282, 7902345,
        5805642, 5805705, 3709002, 3709065, 9770057, 7906377, 7673417, 5809737,
        5576777, 3713097, 3480137, 3248745, 3019362, 3019425, 2789979, 4887137,
        2790042, 2790105, 3023457, 2790497, 2560596, 4657754, 2560659, 4657817,
        2560722, 2560785, 2794074, 2561114, 2794137, 2561177, 2564691, 4661849,
        2564754, 2564817, 2798169, 2565209, 2568786, 2568849, 3281505, 3052122,
        3052185, 2822739, 4919897, 2822802, 2822865, 3056217, 2823257, 2826834,
        2826897,
    ],
    [
        4493933, 6591091, 2396838, 4493996, 6591154, 2396901, 4494059, 6591217,
        2396964, 4494122, 2397027, 12883020, 2397293, 4494451, 12883083, 2397356,
        4494514, 12883146, 2397419, 4494577, 12883209, 2397482, 10786380, 12883538,
        2397811, 10786443, 12883601, 2397874, 10786506, 2397937, 10786569, 8689740,
        10786898, 8689803, 10786961, 8689866, 8689929, 6593100, 8690258, 6593163,
        8690321, 6593226, 6593289, 4496460, 6593618, 4496523, 6593681, 4496586,
        2400870, 4498028, 6595186, 2400933, 4498091, 6595249, 2400996, 4498154,
        2401059, 4498217, 2401122, 12887115, 2401388, 4498546, 12887178, 2401451,
        4498609, 12887241, 2401514, 2401577, 10790475, 12887633, 2401906, 10790538,
        2401969, 10790601, 8693835, 10790993, 8693898, 8693961, 6597195, 8694353,
        6597258, 6597321, 4500555, 6597713, 4500618, 4500681, 2404965, 4502123,
        6599281, 2405028, 4502186, 2405091, 4502249, 2405154, 2405217, 12891210,
        2405483, 4502641, 12891273, 2405546, 2405609, 10794570, 2406001, 10794633,
        8697930, 8697993, 6601290, 6601353, 4504650, 4504713, 2409060, 4506218,
        2409123, 4506281, 2409186, 2409249, 12895305, 2409578, 2409641, 10798665,
        8702025, 6605385, 2413155, 4510313, 2413218, 2413281, 2413673, 2417250,
        2417313, 2658918, 4756076, 6853234, 2658981, 4756139, 6853297, 2659044,
        4756202, 2659107, 4756265, 2659170, 13145163, 2659436, 4756594, 13145226,
        2659499, 4756657, 13145289, 2659562, 2659625, 11048523, 13145681, 2659954,
        11048586, 2660017, 11048649, 8951883, 11049041, 8951946, 8952009, 6855243,
        8952401, 6855306, 6855369, 4758603, 6855761, 4758666, 4758729, 4526693,
        6623851, 8721009, 2429598, 4526756, 6623914, 2429661, 4526819, 6623977,
        2429724, 4526882, 2429787, 4526945, 2429850, 2663013, 4760171, 6857329,
        2430053, 2663076, 4760234, 2430116, 4527274, 4760297, 2430179, 2663202,
        2430242, 2663265, 2430305, 13149258, 2663531, 4760689, 12916298, 13149321,
        2430571, 2663594, 12916361, 2430634, 2663657, 2430697, 11052618, 2664049,
        10819658, 11052681, 2431089, 10819721, 8955978, 8723018, 8956041, 8723081,
        6859338, 6626378, 6859401, 6626441, 4762698, 4762761, 2433630, 4530788,
        6627946, 2433693, 4530851, 6628009, 2433756, 4530914, 2433819, 4530977,
        2433882, 2433945, 2667108, 4764266, 2434148, 2667171, 4764329, 2434211,
        4531369, 2434274, 2667297, 2434337, 13153353, 2667626, 12920393, 2434666,
        2667689, 2434729, 11056713, 10823753, 8960073, 8727113, 6863433, 6630473,
        4766793, 2437725, 4534883, 6632041, 2437788, 4534946, 2437851, 4535009,
        2437914, 2437977, 2671203, 4768361, 2438243, 2671266, 2438306, 2671329,
        2438369, 2671721, 2438761, 2441820, 4538978, 2441883, 4539041, 2441946,
        2442009, 2675298, 2442338, 2675361, 2442401, 2445915, 4543073, 2445978,
        2446041, 2679393, 2446433, 2450010, 2450073, 2921061, 5018219, 7115377,
        2921124, 5018282, 2921187, 5018345, 2921250, 2921313, 13407306, 2921579,
        5018737, 13407369, 2921642, 2921705, 11310666, 2922097, 11310729, 9214026,
        9214089, 7117386, 7117449, 5020746, 5020809, 2691678, 4788836, 6885994,
        2691741, 4788899, 6886057, 2691804, 4788962, 2691867, 4789025, 2691930,
        2691993, 2925156, 5022314, 2692196, 2925219, 5022377, 2692259, 4789417,
        2692322, 2925345, 2692385, 13411401, 2925674, 13178441, 2692714, 2925737,
        2692777, 11314761, 11081801, 9218121, 8985161, 7121481, 6888521, 5024841,
        4559453, 6656611, 8753769, 2462358, 4559516, 6656674, 2462421, 4559579,
        6656737, 2462484, 4559642, 2462547, 4559705, 2462610, 2695773, 4792931,
        6890089, 2462813, 2695836, 4792994, 2462876, 4560034, 4793057, 2462939,
        2695962, 2463002, 2696025, 2463065, 2929251, 5026409, 2696291, 2929314,
        2463331, 2696354, 2929377, 2463394, 2696417, 2463457, 2929769, 2696809,
        2463849, 2466390, 4563548, 6660706, 2466453, 4563611, 6660769, 2466516,
        4563674, 2466579, 4563737, 2466642, 2466705, 2699868, 4797026, 2466908,
        2699931, 4797089, 2466971, 4564129, 2467034, 2700057, 2467097, 2933346,
        2700386, 2933409, 2467426, 2700449, 2467489, 2470485, 4567643, 6664801,
        2470548, 4567706, 2470611, 4567769, 2470674, 2470737, 2703963, 4801121,
        2471003, 2704026, 2471066, 2704089, 2471129, 2937441, 2704481, 2471521,
        2474580, 4571738, 2474643, 4571801, 2474706, 2474769, 2708058, 2475098,
        2708121, 2475161, 2478675, 4575833, 2478738, 2478801, 2712153, 2479193,
        2482770, 2482833, 3183204, 5280362, 3183267, 5280425, 3183330, 3183393,
        3183722, 3183785, 11572809, 9476169, 7379529, 5282889, 2953821, 5050979,
        7148137, 2953884, 5051042, 2953947, 5051105, 2954010, 2954073, 3187299,
        5284457, 2954339, 3187362, 2954402, 3187425, 2954465, 3187817, 2954857,
        2724438, 4821596, 6918754, 2724501, 4821659, 6918817, 2724564, 4821722,
        2724627, 4821785, 2724690, 2724753, 2957916, 5055074, 2724956, 2957979,
        5055137, 2725019, 2958042, 2725082, 2958105, 2725145, 3191394, 2958434,
        3191457, 2725474, 2958497, 2725537, 4592213, 6689371, 8786529, 2495118,
        4592276, 6689434, 2495181, 4592339, 6689497, 2495244, 4592402, 2495307,
        4592465, 2495370, 2728533, 4825691, 6922849, 2495573, 2728596, 4825754,
        2495636, 4592794, 4825817, 2495699, 2728722, 2495762, 2728785, 2495825,
        2962011, 5059169, 2729051, 2962074, 2496091, 2729114, 2962137, 2496154,
        2729177, 2496217, 3195489, 2962529, 2729569, 2496609, 2499150, 4596308,
        6693466, 2499213, 4596371, 6693529, 2499276, 4596434, 2499339, 4596497,
        2499402, 2499465, 2732628, 4829786, 2499668, 2732691, 4829849, 2499731,
        4596889, 2499794, 2732817, 2499857, 2966106, 2733146, 2966169, 2500186,
        2733209, 2500249, 2503245, 4600403, 6697561, 2503308, 4600466, 2503371,
        4600529, 2503434, 2503497, 2736723, 4833881, 2503763, 2736786, 2503826,
        2736849, 2503889, 2970201, 2737241, 2504281, 2507340, 4604498, 2507403,
        4604561, 2507466, 2507529, 2740818, 2507858, 2740881, 2507921, 2511435,
        4608593, 2511498, 2511561, 2744913, 2511953, 3445347, 5542505, 3445410,
        3445473, 3445865, 3215964, 5313122, 3216027, 5313185, 3216090, 3216153,
        3449442, 3216482, 3449505, 3216545, 2986581, 5083739, 7180897, 2986644,
        5083802, 2986707, 5083865, 2986770, 2986833, 3220059, 5317217, 2987099,
        3220122, 2987162, 3220185, 2987225, 3453537, 3220577, 2987617, 2757198,
        4854356, 6951514, 2757261, 4854419, 6951577, 2757324, 4854482, 2757387,
        4854545, 2757450, 2757513, 2990676, 5087834, 2757716, 2990739, 5087897,
        2757779, 4854937, 2757842, 2990865, 2757905, 3224154, 2991194, 3224217,
        2758234, 2991257, 2758297, 4624973, 6722131, 8819289, 4625036, 6722194,
        4625099, 6722257, 4625162, 4625225, 2761293, 4858451, 6955609, 2528333,
        2761356, 4858514, 2528396, 4625554, 4858577, 2528459, 2761482, 2528522,
        2761545, 2528585, 2994771, 5091929, 2761811, 2994834, 2528851, 2761874,
        2994897, 2528914, 2761937, 2528977, 3228249, 2995289, 2762329, 2529369,
        4629068, 6726226, 4629131, 6726289, 4629194, 4629257, 2765388, 4862546,
        2532428, 2765451, 4862609, 2532491, 4629649, 2532554, 2765577, 2532617,
        2998866, 2765906, 2998929, 2532946, 2765969, 2533009, 4633163, 6730321,
        4633226, 4633289, 2769483, 4866641, 2536523, 2769546, 2536586, 2769609,
        2536649, 3002961, 2770001, 2537041, 4637258, 4637321, 2773578, 2540618,
        2773641, 2540681, 3707490, 3707553, 3478107, 5575265, 3478170, 3478233,
        3711585, 3478625, 3248724, 5345882, 3248787, 5345945, 3248850, 3248913,
        3482202, 3249242, 3482265, 3249305, 3019341, 5116499, 7213657, 3019404,
        5116562, 3019467, 5116625, 3019530, 3019593, 3252819, 5349977, 3019859,
        5117017, 3019922, 3252945, 3019985, 3486297, 3253337, 3020377, 4887116,
        6984274, 4887179, 6984337, 4887242, 4887305, 3023436, 5120594, 2790476,
        4887634, 5120657, 2790539, 3023562, 2790602, 3023625, 2790665, 3256914,
        3023954, 3256977, 2790994, 3024017, 2791057, 6754891, 8852049, 6754954,
        6755017, 4891211, 6988369, 4658251, 4891274, 4658314, 4891337, 4658377,
        3027531, 5124689, 2794571, 3027594, 2561611, 2794634, 3027657, 2561674,
        2794697, 2561737, 3261009, 3028049, 2795089, 2562129, 6758986, 6759049,
        4895306, 4662346, 4895369, 4662409, 3031626, 2798666, 3031689, 2565706,
        2798729, 2565769, 6763081, 4899401, 4666441, 3035721, 2802761, 2569801,
        3740250, 3740313, 3510867, 5608025, 3510930, 3510993, 3744345, 3511385,
        3281484, 5378642, 3281547, 5378705, 3281610, 3281673, 3514962, 3282002,
        3515025, 3282065, 5149259, 7246417, 5149322, 5149385, 3285579, 5382737,
        3052619, 5149777, 3052682, 3285705, 3052745, 3519057, 3286097, 3053137,
        7017034, 7017097, 5153354, 4920394, 5153417, 4920457, 3289674, 3056714,
        3289737, 2823754, 3056777, 2823817, 7021129, 5157449, 4924489, 3293769,
        3060809, 2827849, 3773010, 3773073, 3543627, 5640785, 3543690, 3543753,
        3777105, 3544145, 5411402, 5411465, 3547722, 3314762, 3547785, 3314825,
        7279177,
    ],
];

/// Row address patterns: side (left and right) then centre
pub(crate) static BAR_RAP: [[u32; 52]; 2] = [
    [
        74441, 103113, 103561, 74889, 71305, 71753, 75337, 104009,
        107593, 136265, 139849, 111177, 82505, 78921, 78473, 107145,
        135817, 135761, 135754, 107082, 103498, 103050, 103057, 103001,
        102994, 102987, 74315, 74322, 74329, 74385, 74833, 103505,
        107089, 78417, 78410, 74826, 71242, 70794, 70801, 70745,
        70738, 70731, 70283, 70227, 70234, 70241, 70297, 70290,
        70346, 70353, 70409, 70857,
    ],
    [
        38041, 41625, 42073, 45657, 45713, 46161, 49745, 49801,
        50249, 46665, 46217, 45769, 42185, 42633, 43081, 39497,
        39049, 38993, 42577, 42570, 42122, 42129, 41681, 41737,
        38153, 38601, 38545, 38538, 38482, 42066, 45650, 45643,
        42059, 38475, 38027, 38034, 38090, 38097, 37649, 37593,
        37586, 37530, 37523, 37467, 37460, 37516, 37964, 41548,
        41555, 41562, 37978, 37985,
    ],
];
