//! Embedded κ̄ and null quantile tables.
//!
//! Tables are indexed `[i][j]` for the standardized bounds
//! `(LOWER_AXIS[i], UPPER_AXIS[j])` of [`crate::table_grid`]. Quantile
//! tables carry one entry per level of
//! [`crate::critical_values::PROBABILITY_LEVELS`].
//!
//! Values were simulated with 500 observations per path under the
//! truncated bounded random walk null, unit innovation variance, start value
//! zero and Quadratic-Spectral long-run variance: 2000 replications per
//! candidate for κ̄, 5000 replications per node for the quantiles. κ̄ was
//! calibrated on the nodes 0.25, 0.5, 0.75, 1, 1.5 and 3, smoothed to be
//! monotone in the bound width, and filled in at 0.35, 0.6 and 2 by
//! reciprocal interpolation. The widest node is the ERS value -7.

use crate::detrending::DetrendingMethod;
use crate::statistics::StatisticKind;
use crate::table_grid::GRID_NODES;

/// Null quantiles of one statistic over the bound grid.
pub type QuantileTable = [[[f64; 9]; GRID_NODES]; GRID_NODES];

/// κ̄ over the bound grid.
#[rustfmt::skip]
pub const KAPPA_TABLE: [[f64; GRID_NODES]; GRID_NODES] = [
    [-13.60, -10.42, -8.03, -7.70, -7.37, -7.37, -7.25, -7.12, -7.00],
    [-13.60, -10.42, -8.03, -7.70, -7.37, -7.37, -7.25, -7.19, -7.12],
    [-13.60, -10.42, -8.03, -7.70, -7.37, -7.37, -7.25, -7.25, -7.25],
    [-13.60, -10.42, -8.03, -7.70, -7.37, -7.37, -7.37, -7.37, -7.37],
    [-13.60, -10.42, -8.03, -7.87, -7.70, -7.37, -7.37, -7.37, -7.37],
    [-13.60, -10.46, -8.11, -7.99, -7.87, -7.70, -7.70, -7.70, -7.70],
    [-13.60, -10.51, -8.19, -8.11, -8.03, -8.03, -8.03, -8.03, -8.03],
    [-13.96, -11.99, -10.51, -10.46, -10.42, -10.42, -10.42, -10.42, -10.42],
    [-14.45, -13.96, -13.60, -13.60, -13.60, -13.60, -13.60, -13.60, -13.60],
];

/// MZα quantiles under OLS detrending.
#[rustfmt::skip]
pub const OLS_MZ_ALPHA: QuantileTable = [
    [
        [-33.8794, -27.7780, -22.8363, -17.6971, -6.2076, -1.2713, -0.3130, 0.3431, 1.2061],
        [-32.4306, -26.0450, -21.8821, -17.0780, -6.0812, -1.2912, -0.4129, 0.3384, 1.1514],
        [-28.0585, -22.8660, -19.2989, -15.4060, -5.9876, -1.3955, -0.4900, 0.3078, 0.9816],
        [-26.1709, -21.5602, -18.2285, -14.4911, -5.7381, -1.4680, -0.4832, 0.1707, 0.9990],
        [-22.9897, -19.2727, -16.1566, -13.1044, -5.4965, -1.3837, -0.5134, 0.1363, 0.8897],
        [-21.4686, -17.8217, -14.9750, -12.2455, -5.1636, -1.3393, -0.4996, 0.1014, 0.6883],
        [-19.9569, -16.9227, -14.2093, -11.3010, -4.5001, -1.0390, -0.2827, 0.2463, 0.9691],
        [-20.3661, -17.0824, -14.1453, -11.4183, -4.4320, -0.9291, -0.2117, 0.3501, 0.9847],
        [-20.8959, -16.8775, -14.1394, -11.4633, -4.3347, -0.8710, -0.1453, 0.2755, 0.9441],
    ],
    [
        [-34.7638, -28.1239, -23.1333, -18.1088, -6.1623, -1.4499, -0.5705, 0.1735, 0.9102],
        [-31.9391, -25.9771, -21.4801, -17.1559, -6.2717, -1.4562, -0.5936, 0.1400, 0.9727],
        [-29.1632, -23.2453, -19.3792, -15.4896, -6.0504, -1.4181, -0.5861, 0.1945, 0.9739],
        [-26.5359, -21.8523, -18.2693, -15.0709, -5.9340, -1.4562, -0.6568, -0.0026, 0.8140],
        [-23.9235, -19.7345, -16.1469, -13.1630, -5.4875, -1.4459, -0.5940, 0.0562, 0.7212],
        [-20.7127, -17.2357, -14.6084, -12.0125, -5.1371, -1.4028, -0.7136, -0.0616, 0.6165],
        [-20.8790, -16.3483, -13.9082, -11.2566, -4.6396, -1.1981, -0.4439, 0.0658, 0.6411],
        [-20.7707, -17.7528, -14.7198, -11.5426, -4.5225, -1.0127, -0.3440, 0.3166, 0.9395],
        [-20.3661, -17.0824, -14.1453, -11.4183, -4.4320, -0.9291, -0.2117, 0.3501, 0.9847],
    ],
    [
        [-32.8622, -27.0352, -22.3832, -17.5208, -6.2575, -1.6724, -0.8723, -0.2279, 0.6118],
        [-33.0641, -26.4872, -21.9916, -17.0585, -6.2628, -1.7290, -0.8953, -0.2061, 0.6263],
        [-28.4677, -23.2416, -19.3476, -15.5170, -6.0161, -1.6777, -0.8343, -0.2157, 0.5681],
        [-26.0037, -21.1769, -17.3088, -14.1327, -5.7857, -1.7413, -0.9605, -0.2185, 0.4679],
        [-23.4429, -19.4466, -16.7108, -13.5446, -5.7773, -1.7327, -1.0734, -0.4143, 0.2766],
        [-20.3927, -17.1467, -14.7425, -12.0045, -5.2600, -1.4867, -0.7929, -0.2474, 0.2926],
        [-20.1709, -16.5820, -14.1359, -11.2615, -4.7450, -1.3339, -0.6125, -0.0168, 0.6924],
        [-20.8790, -16.3483, -13.9082, -11.2566, -4.6396, -1.1981, -0.4439, 0.0658, 0.6411],
        [-19.9569, -16.9227, -14.2093, -11.3010, -4.5001, -1.0390, -0.2827, 0.2463, 0.9691],
    ],
    [
        [-34.4261, -27.9904, -22.8940, -17.9385, -7.1196, -2.7127, -2.0761, -1.5084, -0.8404],
        [-30.4429, -25.2827, -21.3741, -16.9517, -6.9075, -2.4302, -1.7503, -1.1774, -0.6855],
        [-27.1710, -23.0504, -19.1817, -15.8160, -6.7597, -2.2927, -1.5395, -0.8886, -0.3197],
        [-26.0859, -21.1887, -17.8762, -14.5911, -6.6422, -2.1801, -1.3728, -0.7904, -0.2038],
        [-22.9401, -19.5199, -17.0391, -14.0104, -6.2909, -2.1383, -1.4132, -0.8196, -0.3095],
        [-20.6147, -17.4692, -15.0653, -12.4173, -5.7385, -1.9612, -1.1779, -0.6002, 0.0465],
        [-20.3927, -17.1467, -14.7425, -12.0045, -5.2600, -1.4867, -0.7929, -0.2474, 0.2926],
        [-20.7127, -17.2357, -14.6084, -12.0125, -5.1371, -1.4028, -0.7136, -0.0616, 0.6165],
        [-21.4686, -17.8217, -14.9750, -12.2455, -5.1636, -1.3393, -0.4996, 0.1014, 0.6883],
    ],
    [
        [-35.2223, -28.0361, -22.8090, -18.3080, -8.0331, -3.9845, -3.3147, -2.8246, -2.3256],
        [-32.3377, -26.3133, -22.1192, -17.7335, -7.9108, -3.4417, -2.7667, -2.2752, -1.8012],
        [-29.1055, -23.5072, -20.2151, -16.8120, -7.3322, -2.8924, -2.2003, -1.7762, -1.1957],
        [-26.3509, -22.4371, -19.1937, -16.0003, -7.0611, -2.5711, -1.8085, -1.4226, -0.8824],
        [-24.7855, -20.8505, -17.5760, -14.8243, -6.8844, -2.2655, -1.6034, -1.0888, -0.6192],
        [-22.9401, -19.5199, -17.0391, -14.0104, -6.2909, -2.1383, -1.4132, -0.8196, -0.3095],
        [-23.4429, -19.4466, -16.7108, -13.5446, -5.7773, -1.7327, -1.0734, -0.4143, 0.2766],
        [-23.9235, -19.7345, -16.1469, -13.1630, -5.4875, -1.4459, -0.5940, 0.0562, 0.7212],
        [-22.9897, -19.2727, -16.1566, -13.1044, -5.4965, -1.3837, -0.5134, 0.1363, 0.8897],
    ],
    [
        [-35.0190, -28.9224, -23.8765, -19.5052, -9.3656, -5.2463, -4.5157, -3.9677, -3.3389],
        [-33.1490, -27.6023, -23.6818, -19.0653, -8.6258, -4.3665, -3.6482, -3.1247, -2.6819],
        [-30.1184, -24.7497, -21.2104, -17.6495, -7.8697, -3.4629, -2.7425, -2.2334, -1.7268],
        [-28.0772, -23.6739, -20.2528, -16.5349, -7.3905, -2.9663, -2.3125, -1.8751, -1.4103],
        [-26.3509, -22.4371, -19.1937, -16.0003, -7.0611, -2.5711, -1.8085, -1.4226, -0.8824],
        [-26.0859, -21.1887, -17.8762, -14.5911, -6.6422, -2.1801, -1.3728, -0.7904, -0.2038],
        [-26.0037, -21.1769, -17.3088, -14.1327, -5.7857, -1.7413, -0.9605, -0.2185, 0.4679],
        [-26.5359, -21.8523, -18.2693, -15.0709, -5.9340, -1.4562, -0.6568, -0.0026, 0.8140],
        [-26.1709, -21.5602, -18.2285, -14.4911, -5.7381, -1.4680, -0.4832, 0.1707, 0.9990],
    ],
    [
        [-36.7903, -29.9207, -25.3420, -20.8156, -10.8397, -6.6249, -5.7940, -5.1507, -4.4965],
        [-33.4462, -27.3757, -23.8139, -19.3790, -9.4331, -5.1578, -4.4162, -3.8133, -3.2352],
        [-31.8125, -26.7001, -22.6866, -18.6801, -8.3881, -3.9923, -3.2976, -2.8267, -2.2769],
        [-30.1184, -24.7497, -21.2104, -17.6495, -7.8697, -3.4629, -2.7425, -2.2334, -1.7268],
        [-29.1055, -23.5072, -20.2151, -16.8120, -7.3322, -2.8924, -2.2003, -1.7762, -1.1957],
        [-27.1710, -23.0504, -19.1817, -15.8160, -6.7597, -2.2927, -1.5395, -0.8886, -0.3197],
        [-28.4677, -23.2416, -19.3476, -15.5170, -6.0161, -1.6777, -0.8343, -0.2157, 0.5681],
        [-29.1632, -23.2453, -19.3792, -15.4896, -6.0504, -1.4181, -0.5861, 0.1945, 0.9739],
        [-28.0585, -22.8660, -19.2989, -15.4060, -5.9876, -1.3955, -0.4900, 0.3078, 0.9816],
    ],
    [
        [-37.4060, -31.5876, -27.4537, -23.2396, -14.7737, -9.7361, -8.6432, -7.8178, -6.8843],
        [-37.2382, -31.5854, -26.4673, -21.8877, -11.9881, -7.4976, -6.6637, -5.8875, -5.2420],
        [-33.4462, -27.3757, -23.8139, -19.3790, -9.4331, -5.1578, -4.4162, -3.8133, -3.2352],
        [-33.1490, -27.6023, -23.6818, -19.0653, -8.6258, -4.3665, -3.6482, -3.1247, -2.6819],
        [-32.3377, -26.3133, -22.1192, -17.7335, -7.9108, -3.4417, -2.7667, -2.2752, -1.8012],
        [-30.4429, -25.2827, -21.3741, -16.9517, -6.9075, -2.4302, -1.7503, -1.1774, -0.6855],
        [-33.0641, -26.4872, -21.9916, -17.0585, -6.2628, -1.7290, -0.8953, -0.2061, 0.6263],
        [-31.9391, -25.9771, -21.4801, -17.1559, -6.2717, -1.4562, -0.5936, 0.1400, 0.9727],
        [-32.4306, -26.0450, -21.8821, -17.0780, -6.0812, -1.2912, -0.4129, 0.3384, 1.1514],
    ],
    [
        [-39.8697, -34.6128, -30.9710, -27.7155, -18.9907, -13.3149, -11.8328, -10.7992, -9.7238],
        [-37.4060, -31.5876, -27.4537, -23.2396, -14.7737, -9.7361, -8.6432, -7.8178, -6.8843],
        [-36.7903, -29.9207, -25.3420, -20.8156, -10.8397, -6.6249, -5.7940, -5.1507, -4.4965],
        [-35.0190, -28.9224, -23.8765, -19.5052, -9.3656, -5.2463, -4.5157, -3.9677, -3.3389],
        [-35.2223, -28.0361, -22.8090, -18.3080, -8.0331, -3.9845, -3.3147, -2.8246, -2.3256],
        [-34.4261, -27.9904, -22.8940, -17.9385, -7.1196, -2.7127, -2.0761, -1.5084, -0.8404],
        [-32.8622, -27.0352, -22.3832, -17.5208, -6.2575, -1.6724, -0.8723, -0.2279, 0.6118],
        [-34.7638, -28.1239, -23.1333, -18.1088, -6.1623, -1.4499, -0.5705, 0.1735, 0.9102],
        [-33.8794, -27.7780, -22.8363, -17.6971, -6.2076, -1.2713, -0.3130, 0.3431, 1.2061],
    ],
];

/// MSB quantiles under OLS detrending.
#[rustfmt::skip]
pub const OLS_MSB: QuantileTable = [
    [
        [0.1203, 0.1325, 0.1463, 0.1661, 0.2806, 0.5361, 0.6381, 0.7265, 0.8303],
        [0.1254, 0.1387, 0.1512, 0.1694, 0.2793, 0.5274, 0.6290, 0.7171, 0.8446],
        [0.1382, 0.1508, 0.1633, 0.1808, 0.2837, 0.5050, 0.6036, 0.6837, 0.8006],
        [0.1450, 0.1570, 0.1701, 0.1887, 0.2903, 0.5067, 0.6033, 0.6876, 0.7897],
        [0.1524, 0.1681, 0.1832, 0.2015, 0.2985, 0.5124, 0.6158, 0.7088, 0.8017],
        [0.1558, 0.1716, 0.1880, 0.2097, 0.3169, 0.5117, 0.5943, 0.6810, 0.7814],
        [0.1594, 0.1726, 0.1887, 0.2132, 0.3450, 0.5533, 0.6270, 0.7006, 0.8167],
        [0.1577, 0.1729, 0.1899, 0.2144, 0.3436, 0.5756, 0.6571, 0.7434, 0.8142],
        [0.1565, 0.1735, 0.1887, 0.2110, 0.3426, 0.5959, 0.6879, 0.7754, 0.8843],
    ],
    [
        [0.1191, 0.1327, 0.1449, 0.1634, 0.2801, 0.5262, 0.6127, 0.6823, 0.7624],
        [0.1261, 0.1390, 0.1528, 0.1694, 0.2785, 0.5113, 0.5970, 0.6775, 0.7478],
        [0.1352, 0.1500, 0.1627, 0.1806, 0.2808, 0.5099, 0.5945, 0.6640, 0.7431],
        [0.1450, 0.1581, 0.1699, 0.1864, 0.2867, 0.5051, 0.5886, 0.6541, 0.7360],
        [0.1531, 0.1683, 0.1829, 0.2018, 0.2999, 0.5177, 0.5964, 0.6671, 0.7333],
        [0.1575, 0.1734, 0.1903, 0.2114, 0.3184, 0.5147, 0.5993, 0.6536, 0.7203],
        [0.1572, 0.1744, 0.1931, 0.2146, 0.3405, 0.5474, 0.6145, 0.6838, 0.7439],
        [0.1578, 0.1718, 0.1886, 0.2113, 0.3411, 0.5743, 0.6550, 0.7153, 0.7771],
        [0.1577, 0.1729, 0.1899, 0.2144, 0.3436, 0.5756, 0.6571, 0.7434, 0.8142],
    ],
    [
        [0.1221, 0.1343, 0.1479, 0.1671, 0.2810, 0.4847, 0.5505, 0.6067, 0.6606],
        [0.1240, 0.1371, 0.1498, 0.1699, 0.2799, 0.4865, 0.5531, 0.6041, 0.6581],
        [0.1367, 0.1506, 0.1635, 0.1810, 0.2867, 0.4856, 0.5450, 0.5970, 0.6633],
        [0.1463, 0.1597, 0.1743, 0.1916, 0.2900, 0.4717, 0.5352, 0.5934, 0.6618],
        [0.1543, 0.1676, 0.1794, 0.1990, 0.2961, 0.4657, 0.5369, 0.5849, 0.6488],
        [0.1609, 0.1753, 0.1896, 0.2112, 0.3180, 0.4839, 0.5367, 0.5879, 0.6526],
        [0.1584, 0.1759, 0.1921, 0.2143, 0.3409, 0.5240, 0.5811, 0.6271, 0.6763],
        [0.1572, 0.1744, 0.1931, 0.2146, 0.3405, 0.5474, 0.6145, 0.6838, 0.7439],
        [0.1594, 0.1726, 0.1887, 0.2132, 0.3450, 0.5533, 0.6270, 0.7006, 0.8167],
    ],
    [
        [0.1199, 0.1329, 0.1466, 0.1658, 0.2675, 0.4047, 0.4420, 0.4718, 0.5070],
        [0.1288, 0.1406, 0.1531, 0.1706, 0.2691, 0.4090, 0.4513, 0.4858, 0.5213],
        [0.1384, 0.1500, 0.1641, 0.1816, 0.2740, 0.4142, 0.4589, 0.4931, 0.5428],
        [0.1464, 0.1593, 0.1728, 0.1900, 0.2741, 0.4108, 0.4584, 0.5041, 0.5462],
        [0.1547, 0.1673, 0.1802, 0.1977, 0.2863, 0.4191, 0.4656, 0.5073, 0.5570],
        [0.1575, 0.1761, 0.1909, 0.2124, 0.3034, 0.4384, 0.4868, 0.5321, 0.5818],
        [0.1609, 0.1753, 0.1896, 0.2112, 0.3180, 0.4839, 0.5367, 0.5879, 0.6526],
        [0.1575, 0.1734, 0.1903, 0.2114, 0.3184, 0.5147, 0.5993, 0.6536, 0.7203],
        [0.1558, 0.1716, 0.1880, 0.2097, 0.3169, 0.5117, 0.5943, 0.6810, 0.7814],
    ],
    [
        [0.1187, 0.1333, 0.1474, 0.1653, 0.2473, 0.3367, 0.3644, 0.3846, 0.4093],
        [0.1264, 0.1393, 0.1520, 0.1694, 0.2476, 0.3549, 0.3840, 0.4095, 0.4374],
        [0.1369, 0.1503, 0.1623, 0.1771, 0.2562, 0.3724, 0.4041, 0.4363, 0.4705],
        [0.1461, 0.1573, 0.1695, 0.1826, 0.2613, 0.3844, 0.4277, 0.4620, 0.5030],
        [0.1503, 0.1657, 0.1775, 0.1920, 0.2694, 0.4009, 0.4429, 0.4755, 0.5240],
        [0.1547, 0.1673, 0.1802, 0.1977, 0.2863, 0.4191, 0.4656, 0.5073, 0.5570],
        [0.1543, 0.1676, 0.1794, 0.1990, 0.2961, 0.4657, 0.5369, 0.5849, 0.6488],
        [0.1531, 0.1683, 0.1829, 0.2018, 0.2999, 0.5177, 0.5964, 0.6671, 0.7333],
        [0.1524, 0.1681, 0.1832, 0.2015, 0.2985, 0.5124, 0.6158, 0.7088, 0.8017],
    ],
    [
        [0.1205, 0.1323, 0.1451, 0.1609, 0.2271, 0.2954, 0.3180, 0.3368, 0.3616],
        [0.1266, 0.1369, 0.1472, 0.1626, 0.2347, 0.3189, 0.3425, 0.3638, 0.3928],
        [0.1353, 0.1467, 0.1579, 0.1712, 0.2449, 0.3469, 0.3747, 0.3962, 0.4275],
        [0.1392, 0.1534, 0.1633, 0.1790, 0.2529, 0.3619, 0.3939, 0.4225, 0.4541],
        [0.1461, 0.1573, 0.1695, 0.1826, 0.2613, 0.3844, 0.4277, 0.4620, 0.5030],
        [0.1464, 0.1593, 0.1728, 0.1900, 0.2741, 0.4108, 0.4584, 0.5041, 0.5462],
        [0.1463, 0.1597, 0.1743, 0.1916, 0.2900, 0.4717, 0.5352, 0.5934, 0.6618],
        [0.1450, 0.1581, 0.1699, 0.1864, 0.2867, 0.5051, 0.5886, 0.6541, 0.7360],
        [0.1450, 0.1570, 0.1701, 0.1887, 0.2903, 0.5067, 0.6033, 0.6876, 0.7897],
    ],
    [
        [0.1169, 0.1288, 0.1400, 0.1543, 0.2109, 0.2659, 0.2819, 0.2985, 0.3140],
        [0.1253, 0.1365, 0.1460, 0.1607, 0.2241, 0.2940, 0.3166, 0.3353, 0.3552],
        [0.1305, 0.1410, 0.1516, 0.1661, 0.2368, 0.3248, 0.3511, 0.3722, 0.4009],
        [0.1353, 0.1467, 0.1579, 0.1712, 0.2449, 0.3469, 0.3747, 0.3962, 0.4275],
        [0.1369, 0.1503, 0.1623, 0.1771, 0.2562, 0.3724, 0.4041, 0.4363, 0.4705],
        [0.1384, 0.1500, 0.1641, 0.1816, 0.2740, 0.4142, 0.4589, 0.4931, 0.5428],
        [0.1367, 0.1506, 0.1635, 0.1810, 0.2867, 0.4856, 0.5450, 0.5970, 0.6633],
        [0.1352, 0.1500, 0.1627, 0.1806, 0.2808, 0.5099, 0.5945, 0.6640, 0.7431],
        [0.1382, 0.1508, 0.1633, 0.1808, 0.2837, 0.5050, 0.6036, 0.6837, 0.8006],
    ],
    [
        [0.1156, 0.1258, 0.1346, 0.1452, 0.1813, 0.2211, 0.2336, 0.2458, 0.2608],
        [0.1170, 0.1262, 0.1379, 0.1504, 0.1994, 0.2494, 0.2633, 0.2749, 0.2914],
        [0.1253, 0.1365, 0.1460, 0.1607, 0.2241, 0.2940, 0.3166, 0.3353, 0.3552],
        [0.1266, 0.1369, 0.1472, 0.1626, 0.2347, 0.3189, 0.3425, 0.3638, 0.3928],
        [0.1264, 0.1393, 0.1520, 0.1694, 0.2476, 0.3549, 0.3840, 0.4095, 0.4374],
        [0.1288, 0.1406, 0.1531, 0.1706, 0.2691, 0.4090, 0.4513, 0.4858, 0.5213],
        [0.1240, 0.1371, 0.1498, 0.1699, 0.2799, 0.4865, 0.5531, 0.6041, 0.6581],
        [0.1261, 0.1390, 0.1528, 0.1694, 0.2785, 0.5113, 0.5970, 0.6775, 0.7478],
        [0.1254, 0.1387, 0.1512, 0.1694, 0.2793, 0.5274, 0.6290, 0.7171, 0.8446],
    ],
    [
        [0.1111, 0.1193, 0.1260, 0.1330, 0.1600, 0.1898, 0.2015, 0.2103, 0.2220],
        [0.1156, 0.1258, 0.1346, 0.1452, 0.1813, 0.2211, 0.2336, 0.2458, 0.2608],
        [0.1169, 0.1288, 0.1400, 0.1543, 0.2109, 0.2659, 0.2819, 0.2985, 0.3140],
        [0.1205, 0.1323, 0.1451, 0.1609, 0.2271, 0.2954, 0.3180, 0.3368, 0.3616],
        [0.1187, 0.1333, 0.1474, 0.1653, 0.2473, 0.3367, 0.3644, 0.3846, 0.4093],
        [0.1199, 0.1329, 0.1466, 0.1658, 0.2675, 0.4047, 0.4420, 0.4718, 0.5070],
        [0.1221, 0.1343, 0.1479, 0.1671, 0.2810, 0.4847, 0.5505, 0.6067, 0.6606],
        [0.1191, 0.1327, 0.1449, 0.1634, 0.2801, 0.5262, 0.6127, 0.6823, 0.7624],
        [0.1203, 0.1325, 0.1463, 0.1661, 0.2806, 0.5361, 0.6381, 0.7265, 0.8303],
    ],
];

/// MZt quantiles under OLS detrending.
#[rustfmt::skip]
pub const OLS_MZ_T: QuantileTable = [
    [
        [-4.1024, -3.7244, -3.3778, -2.9914, -1.8259, -0.6099, -0.1790, 0.1801, 0.6603],
        [-4.1058, -3.6273, -3.3162, -2.9469, -1.7689, -0.6276, -0.2058, 0.1948, 0.5864],
        [-3.9201, -3.5326, -3.2140, -2.8729, -1.7597, -0.6561, -0.2490, 0.1645, 0.5287],
        [-3.8224, -3.4971, -3.1628, -2.8093, -1.7391, -0.6729, -0.2616, 0.1026, 0.5988],
        [-3.6739, -3.3243, -3.0600, -2.7292, -1.6895, -0.6331, -0.2605, 0.0709, 0.5450],
        [-3.6181, -3.2711, -2.9975, -2.6856, -1.6718, -0.6303, -0.2597, 0.0532, 0.3468],
        [-3.4357, -3.1619, -2.8860, -2.5819, -1.6085, -0.5022, -0.1476, 0.1290, 0.5530],
        [-3.4065, -3.1200, -2.8777, -2.5862, -1.5980, -0.4840, -0.1057, 0.1987, 0.5195],
        [-3.4650, -3.1235, -2.8426, -2.5681, -1.5727, -0.4538, -0.0845, 0.1758, 0.5139],
    ],
    [
        [-4.1643, -3.7134, -3.4004, -3.0145, -1.8150, -0.6600, -0.3005, 0.0856, 0.3920],
        [-4.0389, -3.6423, -3.3401, -2.9653, -1.8025, -0.6983, -0.2940, 0.0739, 0.5487],
        [-3.9617, -3.5546, -3.2102, -2.8633, -1.7783, -0.6787, -0.2845, 0.1070, 0.4576],
        [-3.9495, -3.4950, -3.1804, -2.8621, -1.7664, -0.6722, -0.3172, -0.0012, 0.3988],
        [-3.8022, -3.3750, -3.0451, -2.7263, -1.7090, -0.6666, -0.3254, 0.0231, 0.3822],
        [-3.4923, -3.1912, -2.9536, -2.6765, -1.6884, -0.6586, -0.3402, -0.0232, 0.3267],
        [-3.5101, -3.1775, -2.9249, -2.5973, -1.5998, -0.5834, -0.2305, 0.0377, 0.3164],
        [-3.4646, -3.1617, -2.9301, -2.6339, -1.6178, -0.5026, -0.1856, 0.1503, 0.5375],
        [-3.4065, -3.1200, -2.8777, -2.5862, -1.5980, -0.4840, -0.1057, 0.1987, 0.5195],
    ],
    [
        [-4.0779, -3.6778, -3.3523, -2.9749, -1.8450, -0.7591, -0.3994, -0.0911, 0.2951],
        [-4.1379, -3.6737, -3.3643, -2.9516, -1.8317, -0.7924, -0.4470, -0.0963, 0.2902],
        [-3.9287, -3.5397, -3.2426, -2.8821, -1.7753, -0.7515, -0.3967, -0.1082, 0.2881],
        [-3.8577, -3.4809, -3.1462, -2.7954, -1.7599, -0.7543, -0.4391, -0.1236, 0.2087],
        [-3.7311, -3.3669, -3.0957, -2.7792, -1.7547, -0.7680, -0.4895, -0.2194, 0.1335],
        [-3.5927, -3.2521, -3.0003, -2.6959, -1.7019, -0.6852, -0.3749, -0.1283, 0.1447],
        [-3.5137, -3.1958, -2.9382, -2.6509, -1.6376, -0.6226, -0.3009, -0.0086, 0.3658],
        [-3.5101, -3.1775, -2.9249, -2.5973, -1.5998, -0.5834, -0.2305, 0.0377, 0.3164],
        [-3.4357, -3.1619, -2.8860, -2.5819, -1.6085, -0.5022, -0.1476, 0.1290, 0.5530],
    ],
    [
        [-4.1543, -3.7617, -3.4507, -3.0521, -1.9203, -1.0753, -0.8292, -0.5991, -0.3251],
        [-3.9757, -3.6377, -3.3307, -2.9981, -1.8734, -0.9683, -0.7130, -0.5125, -0.2805],
        [-3.9094, -3.5444, -3.2345, -2.9155, -1.8472, -0.9276, -0.6801, -0.4105, -0.1282],
        [-3.8846, -3.4876, -3.1944, -2.8558, -1.8276, -0.8712, -0.6105, -0.3689, -0.0848],
        [-3.7520, -3.4187, -3.1360, -2.8539, -1.8092, -0.8752, -0.6158, -0.3745, -0.1459],
        [-3.6472, -3.3402, -3.0655, -2.7533, -1.7457, -0.8190, -0.5291, -0.2801, 0.0279],
        [-3.5927, -3.2521, -3.0003, -2.6959, -1.7019, -0.6852, -0.3749, -0.1283, 0.1447],
        [-3.4923, -3.1912, -2.9536, -2.6765, -1.6884, -0.6586, -0.3402, -0.0232, 0.3267],
        [-3.6181, -3.2711, -2.9975, -2.6856, -1.6718, -0.6303, -0.2597, 0.0532, 0.3468],
    ],
    [
        [-4.2457, -3.8362, -3.4163, -3.0706, -2.0029, -1.3304, -1.1590, -1.0040, -0.8334],
        [-4.0946, -3.7182, -3.4160, -3.0534, -1.9687, -1.1931, -1.0258, -0.8658, -0.6707],
        [-4.0544, -3.6231, -3.3356, -3.0138, -1.8908, -1.0524, -0.8600, -0.6812, -0.4995],
        [-3.9854, -3.6240, -3.3054, -2.9653, -1.8686, -0.9759, -0.7486, -0.6036, -0.3885],
        [-3.8459, -3.5454, -3.2132, -2.9120, -1.8504, -0.8955, -0.6751, -0.4909, -0.2716],
        [-3.7520, -3.4187, -3.1360, -2.8539, -1.8092, -0.8752, -0.6158, -0.3745, -0.1459],
        [-3.7311, -3.3669, -3.0957, -2.7792, -1.7547, -0.7680, -0.4895, -0.2194, 0.1335],
        [-3.8022, -3.3750, -3.0451, -2.7263, -1.7090, -0.6666, -0.3254, 0.0231, 0.3822],
        [-3.6739, -3.3243, -3.0600, -2.7292, -1.6895, -0.6331, -0.2605, 0.0709, 0.5450],
    ],
    [
        [-4.2652, -3.8490, -3.5226, -3.1437, -2.1348, -1.5325, -1.3878, -1.2828, -1.1460],
        [-4.1877, -3.8350, -3.5020, -3.1414, -2.0355, -1.3604, -1.2165, -1.0930, -0.9312],
        [-4.0849, -3.6742, -3.3708, -3.0405, -1.9344, -1.1648, -0.9675, -0.8222, -0.6840],
        [-4.0190, -3.6450, -3.3429, -2.9643, -1.8872, -1.0728, -0.8733, -0.7211, -0.5495],
        [-3.9854, -3.6240, -3.3054, -2.9653, -1.8686, -0.9759, -0.7486, -0.6036, -0.3885],
        [-3.8846, -3.4876, -3.1944, -2.8558, -1.8276, -0.8712, -0.6105, -0.3689, -0.0848],
        [-3.8577, -3.4809, -3.1462, -2.7954, -1.7599, -0.7543, -0.4391, -0.1236, 0.2087],
        [-3.9495, -3.4950, -3.1804, -2.8621, -1.7664, -0.6722, -0.3172, -0.0012, 0.3988],
        [-3.8224, -3.4971, -3.1628, -2.8093, -1.7391, -0.6729, -0.2616, 0.1026, 0.5988],
    ],
    [
        [-4.3395, -3.9386, -3.5857, -3.2423, -2.3037, -1.7427, -1.6081, -1.5025, -1.3725],
        [-4.2034, -3.7664, -3.4881, -3.1252, -2.1320, -1.5101, -1.3784, -1.2374, -1.1051],
        [-4.2147, -3.7916, -3.4574, -3.1088, -1.9989, -1.2937, -1.1270, -1.0007, -0.8357],
        [-4.0849, -3.6742, -3.3708, -3.0405, -1.9344, -1.1648, -0.9675, -0.8222, -0.6840],
        [-4.0544, -3.6231, -3.3356, -3.0138, -1.8908, -1.0524, -0.8600, -0.6812, -0.4995],
        [-3.9094, -3.5444, -3.2345, -2.9155, -1.8472, -0.9276, -0.6801, -0.4105, -0.1282],
        [-3.9287, -3.5397, -3.2426, -2.8821, -1.7753, -0.7515, -0.3967, -0.1082, 0.2881],
        [-3.9617, -3.5546, -3.2102, -2.8633, -1.7783, -0.6787, -0.2845, 0.1070, 0.4576],
        [-3.9201, -3.5326, -3.2140, -2.8729, -1.7597, -0.6561, -0.2490, 0.1645, 0.5287],
    ],
    [
        [-4.3455, -3.9800, -3.6904, -3.3817, -2.6768, -2.1466, -2.0072, -1.8936, -1.7583],
        [-4.3753, -4.0173, -3.6467, -3.2966, -2.4003, -1.8559, -1.7210, -1.6131, -1.4948],
        [-4.2034, -3.7664, -3.4881, -3.1252, -2.1320, -1.5101, -1.3784, -1.2374, -1.1051],
        [-4.1877, -3.8350, -3.5020, -3.1414, -2.0355, -1.3604, -1.2165, -1.0930, -0.9312],
        [-4.0946, -3.7182, -3.4160, -3.0534, -1.9687, -1.1931, -1.0258, -0.8658, -0.6707],
        [-3.9757, -3.6377, -3.3307, -2.9981, -1.8734, -0.9683, -0.7130, -0.5125, -0.2805],
        [-4.1379, -3.6737, -3.3643, -2.9516, -1.8317, -0.7924, -0.4470, -0.0963, 0.2902],
        [-4.0389, -3.6423, -3.3401, -2.9653, -1.8025, -0.6983, -0.2940, 0.0739, 0.5487],
        [-4.1058, -3.6273, -3.3162, -2.9469, -1.7689, -0.6276, -0.2058, 0.1948, 0.5864],
    ],
    [
        [-4.4304, -4.1626, -3.9147, -3.6955, -3.0440, -2.5226, -2.3820, -2.2601, -2.1486],
        [-4.3455, -3.9800, -3.6904, -3.3817, -2.6768, -2.1466, -2.0072, -1.8936, -1.7583],
        [-4.3395, -3.9386, -3.5857, -3.2423, -2.3037, -1.7427, -1.6081, -1.5025, -1.3725],
        [-4.2652, -3.8490, -3.5226, -3.1437, -2.1348, -1.5325, -1.3878, -1.2828, -1.1460],
        [-4.2457, -3.8362, -3.4163, -3.0706, -2.0029, -1.3304, -1.1590, -1.0040, -0.8334],
        [-4.1543, -3.7617, -3.4507, -3.0521, -1.9203, -1.0753, -0.8292, -0.5991, -0.3251],
        [-4.0779, -3.6778, -3.3523, -2.9749, -1.8450, -0.7591, -0.3994, -0.0911, 0.2951],
        [-4.1643, -3.7134, -3.4004, -3.0145, -1.8150, -0.6600, -0.3005, 0.0856, 0.3920],
        [-4.1024, -3.7244, -3.3778, -2.9914, -1.8259, -0.6099, -0.1790, 0.1801, 0.6603],
    ],
];

/// PT quantiles under OLS detrending.
#[rustfmt::skip]
pub const OLS_PT: QuantileTable = [
    [
        [0.8000, 0.9687, 1.2205, 1.5953, 4.8154, 18.5080, 26.0575, 35.2921, 46.1526],
        [0.8775, 1.0645, 1.2943, 1.6577, 4.7930, 18.2689, 26.1481, 33.3955, 45.3911],
        [1.0222, 1.2621, 1.5038, 1.8626, 4.8726, 16.5270, 23.6350, 30.6645, 41.7325],
        [1.1303, 1.3700, 1.6438, 2.0278, 5.0862, 16.6740, 23.1146, 31.6398, 40.2623],
        [1.3111, 1.5554, 1.8895, 2.3038, 5.4045, 16.6974, 24.2401, 32.4015, 42.8890],
        [1.3756, 1.6815, 2.0170, 2.5554, 6.0187, 16.4181, 22.9394, 30.4121, 40.1230],
        [1.4021, 1.6834, 2.0991, 2.6299, 7.3655, 19.2145, 24.2678, 31.7501, 42.7077],
        [1.3543, 1.6983, 2.1012, 2.6665, 7.2658, 20.8963, 27.4455, 33.8928, 42.3123],
        [1.3996, 1.7245, 2.0896, 2.6472, 7.3471, 22.4102, 30.1640, 37.8740, 48.8732],
    ],
    [
        [0.7939, 1.0092, 1.2108, 1.5437, 4.9180, 17.5785, 23.8074, 29.2817, 36.1978],
        [0.8967, 1.0734, 1.2944, 1.6264, 4.7228, 16.6940, 22.9124, 28.6913, 36.0556],
        [0.9839, 1.2517, 1.5056, 1.8557, 4.8321, 16.8048, 22.8029, 27.9463, 35.0860],
        [1.1234, 1.3880, 1.6248, 1.9716, 4.9676, 16.3837, 21.6518, 27.0401, 33.8407],
        [1.2531, 1.5992, 1.9004, 2.3393, 5.4542, 16.8205, 22.2805, 27.8714, 34.7671],
        [1.4991, 1.7439, 2.0507, 2.5714, 6.0406, 16.7098, 21.8543, 26.7009, 33.0034],
        [1.4144, 1.7852, 2.1429, 2.7026, 7.0976, 18.5215, 23.8798, 28.2702, 33.5571],
        [1.3461, 1.6337, 2.0121, 2.6035, 7.2754, 20.8582, 26.6655, 31.9801, 37.4603],
        [1.3543, 1.6983, 2.1012, 2.6665, 7.2658, 20.8963, 27.4455, 33.8928, 42.3123],
    ],
    [
        [0.8151, 1.0193, 1.2405, 1.6152, 4.8751, 14.7823, 18.7861, 22.3819, 26.3890],
        [0.8452, 1.0475, 1.3046, 1.6819, 4.7715, 14.8232, 18.8961, 22.8860, 26.4862],
        [1.0232, 1.2721, 1.4974, 1.8912, 4.9780, 14.3118, 18.4595, 22.3392, 27.6485],
        [1.1819, 1.4042, 1.7020, 2.0928, 5.1446, 13.8160, 17.7856, 22.4239, 26.9330],
        [1.3630, 1.5699, 1.8616, 2.2735, 5.3241, 13.4913, 16.9094, 20.6616, 26.3296],
        [1.4083, 1.7330, 2.0544, 2.5585, 6.0595, 14.5300, 17.8770, 21.8879, 26.9046],
        [1.4124, 1.7211, 2.1088, 2.6904, 7.0827, 16.7865, 20.5318, 24.3497, 28.6686],
        [1.4144, 1.7852, 2.1429, 2.7026, 7.0976, 18.5215, 23.8798, 28.2702, 33.5571],
        [1.4021, 1.6834, 2.0991, 2.6299, 7.3655, 19.2145, 24.2678, 31.7501, 42.7077],
    ],
    [
        [0.8259, 0.9851, 1.2107, 1.5511, 4.2574, 9.6325, 11.5724, 13.3520, 15.4493],
        [0.9160, 1.1215, 1.3359, 1.6714, 4.3001, 10.2131, 12.1809, 14.0732, 16.9374],
        [1.0635, 1.2496, 1.4931, 1.8856, 4.3906, 10.4184, 12.9642, 15.3030, 18.0280],
        [1.1710, 1.4198, 1.6942, 2.0579, 4.4248, 10.6100, 13.4920, 15.9543, 19.1594],
        [1.3525, 1.5650, 1.8321, 2.2168, 4.7909, 10.6519, 13.3707, 15.8672, 19.6206],
        [1.3972, 1.7072, 2.1083, 2.6081, 5.4473, 11.7996, 14.7737, 17.2929, 21.3803],
        [1.4083, 1.7330, 2.0544, 2.5585, 6.0595, 14.5300, 17.8770, 21.8879, 26.9046],
        [1.4991, 1.7439, 2.0507, 2.5714, 6.0406, 16.7098, 21.8543, 26.7009, 33.0034],
        [1.3756, 1.6815, 2.0170, 2.5554, 6.0187, 16.4181, 22.9394, 30.4121, 40.1230],
    ],
    [
        [0.8094, 1.0138, 1.2610, 1.5790, 3.5897, 6.7891, 7.8546, 8.7053, 9.9817],
        [0.8515, 1.0649, 1.3002, 1.6314, 3.5823, 7.4692, 8.8277, 9.9551, 11.6160],
        [1.0275, 1.2475, 1.4790, 1.7581, 3.9122, 8.3495, 9.9680, 11.3775, 13.3632],
        [1.1417, 1.3473, 1.5679, 1.8827, 4.0535, 9.1438, 11.1858, 12.9772, 15.3103],
        [1.2728, 1.4930, 1.7529, 2.0944, 4.2490, 9.9257, 12.2582, 14.4053, 17.2195],
        [1.3525, 1.5650, 1.8321, 2.2168, 4.7909, 10.6519, 13.3707, 15.8672, 19.6206],
        [1.3630, 1.5699, 1.8616, 2.2735, 5.3241, 13.4913, 16.9094, 20.6616, 26.3296],
        [1.2531, 1.5992, 1.9004, 2.3393, 5.4542, 16.8205, 22.2805, 27.8714, 34.7671],
        [1.3111, 1.5554, 1.8895, 2.3038, 5.4045, 16.6974, 24.2401, 32.4015, 42.8890],
    ],
    [
        [0.7755, 0.9547, 1.1564, 1.4659, 3.0170, 5.2022, 5.9491, 6.6349, 7.4365],
        [0.8635, 1.0412, 1.2300, 1.4978, 3.2300, 6.0307, 7.0103, 7.8343, 8.8868],
        [1.0026, 1.1860, 1.3827, 1.6740, 3.5591, 7.2005, 8.6207, 9.8107, 11.3162],
        [1.0538, 1.2740, 1.4744, 1.7707, 3.8104, 8.1354, 9.5881, 10.8718, 12.4604],
        [1.1417, 1.3473, 1.5679, 1.8827, 4.0535, 9.1438, 11.1858, 12.9772, 15.3103],
        [1.1710, 1.4198, 1.6942, 2.0579, 4.4248, 10.6100, 13.4920, 15.9543, 19.1594],
        [1.1819, 1.4042, 1.7020, 2.0928, 5.1446, 13.8160, 17.7856, 22.4239, 26.9330],
        [1.1234, 1.3880, 1.6248, 1.9716, 4.9676, 16.3837, 21.6518, 27.0401, 33.8407],
        [1.1303, 1.3700, 1.6438, 2.0278, 5.0862, 16.6740, 23.1146, 31.6398, 40.2623],
    ],
    [
        [0.7547, 0.9382, 1.1191, 1.3668, 2.5640, 4.1470, 4.7206, 5.2077, 5.8372],
        [0.8449, 1.0297, 1.1951, 1.4631, 2.9257, 5.1501, 5.8524, 6.6431, 7.5252],
        [0.9058, 1.0910, 1.2907, 1.5347, 3.3022, 6.3862, 7.4447, 8.3779, 9.6536],
        [1.0026, 1.1860, 1.3827, 1.6740, 3.5591, 7.2005, 8.6207, 9.8107, 11.3162],
        [1.0275, 1.2475, 1.4790, 1.7581, 3.9122, 8.3495, 9.9680, 11.3775, 13.3632],
        [1.0635, 1.2496, 1.4931, 1.8856, 4.3906, 10.4184, 12.9642, 15.3030, 18.0280],
        [1.0232, 1.2721, 1.4974, 1.8912, 4.9780, 14.3118, 18.4595, 22.3392, 27.6485],
        [0.9839, 1.2517, 1.5056, 1.8557, 4.8321, 16.8048, 22.8029, 27.9463, 35.0860],
        [1.0222, 1.2621, 1.5038, 1.8626, 4.8726, 16.5270, 23.6350, 30.6645, 41.7325],
    ],
    [
        [0.7665, 0.8772, 1.0018, 1.1717, 1.8643, 2.8443, 3.2098, 3.5112, 3.9770],
        [0.7593, 0.8909, 1.0495, 1.2721, 2.2874, 3.6382, 4.1275, 4.5254, 5.1092],
        [0.8449, 1.0297, 1.1951, 1.4631, 2.9257, 5.1501, 5.8524, 6.6431, 7.5252],
        [0.8635, 1.0412, 1.2300, 1.4978, 3.2300, 6.0307, 7.0103, 7.8343, 8.8868],
        [0.8515, 1.0649, 1.3002, 1.6314, 3.5823, 7.4692, 8.8277, 9.9551, 11.6160],
        [0.9160, 1.1215, 1.3359, 1.6714, 4.3001, 10.2131, 12.1809, 14.0732, 16.9374],
        [0.8452, 1.0475, 1.3046, 1.6819, 4.7715, 14.8232, 18.8961, 22.8860, 26.4862],
        [0.8967, 1.0734, 1.2944, 1.6264, 4.7228, 16.6940, 22.9124, 28.6913, 36.0556],
        [0.8775, 1.0645, 1.2943, 1.6577, 4.7930, 18.2689, 26.1481, 33.3955, 45.3911],
    ],
    [
        [0.6837, 0.7831, 0.8670, 0.9717, 1.4445, 2.1313, 2.3501, 2.5768, 2.8249],
        [0.7665, 0.8772, 1.0018, 1.1717, 1.8643, 2.8443, 3.2098, 3.5112, 3.9770],
        [0.7547, 0.9382, 1.1191, 1.3668, 2.5640, 4.1470, 4.7206, 5.2077, 5.8372],
        [0.7755, 0.9547, 1.1564, 1.4659, 3.0170, 5.2022, 5.9491, 6.6349, 7.4365],
        [0.8094, 1.0138, 1.2610, 1.5790, 3.5897, 6.7891, 7.8546, 8.7053, 9.9817],
        [0.8259, 0.9851, 1.2107, 1.5511, 4.2574, 9.6325, 11.5724, 13.3520, 15.4493],
        [0.8151, 1.0193, 1.2405, 1.6152, 4.8751, 14.7823, 18.7861, 22.3819, 26.3890],
        [0.7939, 1.0092, 1.2108, 1.5437, 4.9180, 17.5785, 23.8074, 29.2817, 36.1978],
        [0.8000, 0.9687, 1.2205, 1.5953, 4.8154, 18.5080, 26.0575, 35.2921, 46.1526],
    ],
];

/// MZα quantiles under ERS GLS detrending.
#[rustfmt::skip]
pub const GLS_ERS_MZ_ALPHA: QuantileTable = [
    [
        [-24.4454, -20.9702, -18.1566, -14.7582, -2.6828, 0.7659, 1.2416, 1.6938, 2.2292],
        [-18.3680, -15.5438, -13.5595, -11.1265, -3.3924, 0.6994, 1.1707, 1.5958, 2.0740],
        [-14.8677, -11.7812, -9.6796, -7.8726, -3.2145, 0.4915, 0.9749, 1.4160, 1.8998],
        [-14.0783, -10.8816, -8.7883, -6.8536, -2.7012, 0.4144, 0.9536, 1.3760, 1.8881],
        [-13.0461, -10.5242, -8.4126, -6.0163, -1.9918, 0.4652, 0.9854, 1.3939, 1.8983],
        [-14.7206, -10.9713, -8.5400, -6.2240, -1.3613, 0.3548, 0.8770, 1.2918, 1.7289],
        [-14.0318, -10.8202, -8.4201, -5.9938, -0.9549, 0.6965, 1.0786, 1.4908, 1.9840],
        [-14.0286, -10.8439, -8.3051, -6.0920, -1.0487, 0.8259, 1.2023, 1.5052, 1.9260],
        [-14.2477, -11.1697, -8.7159, -6.2079, -1.0517, 0.9292, 1.3032, 1.6508, 2.0551],
    ],
    [
        [-23.4734, -20.8229, -18.0331, -14.9768, -2.6576, 0.6488, 1.0763, 1.4819, 2.0110],
        [-18.2762, -15.6628, -13.4574, -11.2627, -3.4352, 0.5431, 1.0199, 1.4389, 1.9666],
        [-15.1399, -11.8537, -9.7772, -7.8331, -3.2513, 0.4816, 0.9095, 1.3535, 1.8198],
        [-13.7595, -11.0373, -8.8136, -6.9380, -2.6566, 0.4293, 0.8386, 1.2237, 1.6760],
        [-13.1226, -10.2295, -8.0527, -5.9784, -1.9344, 0.4189, 0.8144, 1.1958, 1.6214],
        [-13.7750, -10.9705, -8.4468, -6.0888, -1.3075, 0.3967, 0.8442, 1.1881, 1.6544],
        [-13.9332, -10.7618, -8.2142, -5.8318, -1.0384, 0.6315, 0.9809, 1.2794, 1.5655],
        [-15.1006, -10.8892, -8.3164, -6.0222, -1.1000, 0.8101, 1.1764, 1.4661, 1.8786],
        [-14.0286, -10.8439, -8.3051, -6.0920, -1.0487, 0.8259, 1.2023, 1.5052, 1.9260],
    ],
    [
        [-23.9118, -20.4216, -17.7592, -14.6135, -2.5809, 0.4572, 0.8025, 1.1675, 1.8800],
        [-18.1243, -15.5994, -13.3288, -11.1407, -3.3208, 0.3611, 0.6864, 1.0389, 1.5634],
        [-14.3535, -11.3237, -9.3540, -7.7095, -3.1050, 0.2999, 0.6179, 0.8735, 1.2533],
        [-13.9423, -10.7948, -8.5647, -6.7338, -2.6484, 0.2145, 0.5491, 0.8784, 1.2767],
        [-14.9876, -11.0061, -8.5060, -6.1736, -1.9874, 0.1595, 0.5166, 0.7615, 1.1282],
        [-13.6758, -10.9611, -8.5439, -6.3596, -1.3834, 0.1991, 0.5407, 0.8255, 1.2280],
        [-13.6773, -10.3220, -7.8298, -5.6928, -0.9618, 0.5295, 0.7657, 1.0262, 1.4566],
        [-13.9332, -10.7618, -8.2142, -5.8318, -1.0384, 0.6315, 0.9809, 1.2794, 1.5655],
        [-14.0318, -10.8202, -8.4201, -5.9938, -0.9549, 0.6965, 1.0786, 1.4908, 1.9840],
    ],
    [
        [-23.1717, -20.5625, -17.8362, -14.7110, -2.8290, -0.3304, -0.0618, 0.1218, 0.3096],
        [-18.0059, -15.1202, -13.1697, -11.1280, -3.3762, -0.3963, -0.1196, 0.0582, 0.2053],
        [-14.0517, -11.2429, -9.4999, -7.8042, -3.2854, -0.4885, -0.1920, -0.0301, 0.1416],
        [-14.3066, -10.8999, -8.7287, -6.8299, -2.7406, -0.5075, -0.1976, -0.0260, 0.1411],
        [-14.6133, -10.9953, -8.5548, -6.2085, -2.0612, -0.5043, -0.2258, -0.0455, 0.1203],
        [-13.5625, -10.3128, -8.1106, -5.8697, -1.4940, -0.2318, -0.0494, 0.0754, 0.2212],
        [-13.6758, -10.9611, -8.5439, -6.3596, -1.3834, 0.1991, 0.5407, 0.8255, 1.2280],
        [-13.7750, -10.9705, -8.4468, -6.0888, -1.3075, 0.3967, 0.8442, 1.1881, 1.6544],
        [-14.7206, -10.9713, -8.5400, -6.2240, -1.3613, 0.3548, 0.8770, 1.2918, 1.7289],
    ],
    [
        [-24.1430, -20.5103, -17.8363, -14.5587, -3.7486, -1.3735, -1.0378, -0.8157, -0.6054],
        [-18.4505, -15.2854, -13.2528, -11.2385, -4.1524, -1.4196, -1.0606, -0.8366, -0.6061],
        [-15.5801, -12.0845, -9.8925, -7.8383, -3.6208, -1.4410, -1.0964, -0.8284, -0.5587],
        [-14.6653, -11.0832, -8.9574, -6.8963, -3.0731, -1.3386, -1.0349, -0.8129, -0.6229],
        [-14.5270, -11.3642, -8.8301, -6.6715, -2.4489, -1.0792, -0.7982, -0.6414, -0.5002],
        [-14.6133, -10.9953, -8.5548, -6.2085, -2.0612, -0.5043, -0.2258, -0.0455, 0.1203],
        [-14.9876, -11.0061, -8.5060, -6.1736, -1.9874, 0.1595, 0.5166, 0.7615, 1.1282],
        [-13.1226, -10.2295, -8.0527, -5.9784, -1.9344, 0.4189, 0.8144, 1.1958, 1.6214],
        [-13.0461, -10.5242, -8.4126, -6.0163, -1.9918, 0.4652, 0.9854, 1.3939, 1.8983],
    ],
    [
        [-24.4127, -21.0403, -17.8658, -14.7074, -5.4630, -2.5221, -2.0461, -1.7123, -1.3907],
        [-17.5940, -15.2614, -13.3178, -11.4840, -5.3972, -2.4663, -2.0480, -1.7281, -1.4796],
        [-15.0526, -11.8852, -10.0089, -8.2752, -4.4051, -2.3682, -1.9767, -1.6797, -1.4004],
        [-14.4211, -11.2878, -9.3285, -7.1830, -3.6823, -1.9878, -1.6722, -1.4265, -1.2188],
        [-14.6653, -11.0832, -8.9574, -6.8963, -3.0731, -1.3386, -1.0349, -0.8129, -0.6229],
        [-14.3066, -10.8999, -8.7287, -6.8299, -2.7406, -0.5075, -0.1976, -0.0260, 0.1411],
        [-13.9423, -10.7948, -8.5647, -6.7338, -2.6484, 0.2145, 0.5491, 0.8784, 1.2767],
        [-13.7595, -11.0373, -8.8136, -6.9380, -2.6566, 0.4293, 0.8386, 1.2237, 1.6760],
        [-14.0783, -10.8816, -8.7883, -6.8536, -2.7012, 0.4144, 0.9536, 1.3760, 1.8881],
    ],
    [
        [-24.1976, -21.0826, -18.3700, -15.0387, -7.1288, -3.8052, -3.2159, -2.8107, -2.4170],
        [-17.8873, -15.4629, -13.4303, -11.5548, -6.5881, -3.6543, -3.1124, -2.7142, -2.3571],
        [-15.7639, -12.8578, -10.9052, -9.0956, -5.1280, -3.0449, -2.6225, -2.3169, -1.9939],
        [-15.0526, -11.8852, -10.0089, -8.2752, -4.4051, -2.3682, -1.9767, -1.6797, -1.4004],
        [-15.5801, -12.0845, -9.8925, -7.8383, -3.6208, -1.4410, -1.0964, -0.8284, -0.5587],
        [-14.0517, -11.2429, -9.4999, -7.8042, -3.2854, -0.4885, -0.1920, -0.0301, 0.1416],
        [-14.3535, -11.3237, -9.3540, -7.7095, -3.1050, 0.2999, 0.6179, 0.8735, 1.2533],
        [-15.1399, -11.8537, -9.7772, -7.8331, -3.2513, 0.4816, 0.9095, 1.3535, 1.8198],
        [-14.8677, -11.7812, -9.6796, -7.8726, -3.2145, 0.4915, 0.9749, 1.4160, 1.8998],
    ],
    [
        [-25.5731, -22.3513, -20.2703, -18.1540, -11.9782, -7.7457, -6.8220, -6.1791, -5.4432],
        [-20.1570, -17.9287, -16.0953, -14.2705, -9.5057, -6.3762, -5.6782, -5.1602, -4.5311],
        [-17.8873, -15.4629, -13.4303, -11.5548, -6.5881, -3.6543, -3.1124, -2.7142, -2.3571],
        [-17.5940, -15.2614, -13.3178, -11.4840, -5.3972, -2.4663, -2.0480, -1.7281, -1.4796],
        [-18.4505, -15.2854, -13.2528, -11.2385, -4.1524, -1.4196, -1.0606, -0.8366, -0.6061],
        [-18.0059, -15.1202, -13.1697, -11.1280, -3.3762, -0.3963, -0.1196, 0.0582, 0.2053],
        [-18.1243, -15.5994, -13.3288, -11.1407, -3.3208, 0.3611, 0.6864, 1.0389, 1.5634],
        [-18.2762, -15.6628, -13.4574, -11.2627, -3.4352, 0.5431, 1.0199, 1.4389, 1.9666],
        [-18.3680, -15.5438, -13.5595, -11.1265, -3.3924, 0.6994, 1.1707, 1.5958, 2.0740],
    ],
    [
        [-29.9065, -27.4618, -25.1971, -23.0332, -16.7628, -11.9545, -10.6741, -9.8351, -8.9366],
        [-25.5731, -22.3513, -20.2703, -18.1540, -11.9782, -7.7457, -6.8220, -6.1791, -5.4432],
        [-24.1976, -21.0826, -18.3700, -15.0387, -7.1288, -3.8052, -3.2159, -2.8107, -2.4170],
        [-24.4127, -21.0403, -17.8658, -14.7074, -5.4630, -2.5221, -2.0461, -1.7123, -1.3907],
        [-24.1430, -20.5103, -17.8363, -14.5587, -3.7486, -1.3735, -1.0378, -0.8157, -0.6054],
        [-23.1717, -20.5625, -17.8362, -14.7110, -2.8290, -0.3304, -0.0618, 0.1218, 0.3096],
        [-23.9118, -20.4216, -17.7592, -14.6135, -2.5809, 0.4572, 0.8025, 1.1675, 1.8800],
        [-23.4734, -20.8229, -18.0331, -14.9768, -2.6576, 0.6488, 1.0763, 1.4819, 2.0110],
        [-24.4454, -20.9702, -18.1566, -14.7582, -2.6828, 0.7659, 1.2416, 1.6938, 2.2292],
    ],
];

/// MSB quantiles under ERS GLS detrending.
#[rustfmt::skip]
pub const GLS_ERS_MSB: QuantileTable = [
    [
        [0.1410, 0.1515, 0.1627, 0.1802, 0.3678, 0.8892, 1.0615, 1.2469, 1.4665],
        [0.1626, 0.1751, 0.1876, 0.2061, 0.3408, 0.8532, 1.0441, 1.2168, 1.4218],
        [0.1777, 0.1997, 0.2191, 0.2425, 0.3565, 0.8110, 0.9856, 1.1506, 1.3163],
        [0.1855, 0.2062, 0.2285, 0.2584, 0.3882, 0.8208, 1.0003, 1.1902, 1.3957],
        [0.1900, 0.2100, 0.2357, 0.2721, 0.4341, 0.7969, 1.0224, 1.1775, 1.3749],
        [0.1808, 0.2063, 0.2321, 0.2663, 0.4839, 0.8312, 1.0010, 1.1687, 1.3503],
        [0.1818, 0.2039, 0.2334, 0.2734, 0.5171, 0.9545, 1.0840, 1.2131, 1.3735],
        [0.1842, 0.2056, 0.2328, 0.2703, 0.5125, 0.9976, 1.1407, 1.2756, 1.4470],
        [0.1799, 0.2049, 0.2292, 0.2679, 0.5108, 1.0220, 1.1997, 1.3543, 1.5563],
    ],
    [
        [0.1437, 0.1524, 0.1635, 0.1790, 0.3671, 0.8760, 1.0402, 1.1675, 1.2997],
        [0.1629, 0.1751, 0.1881, 0.2043, 0.3401, 0.8379, 1.0092, 1.1481, 1.3094],
        [0.1788, 0.1998, 0.2183, 0.2427, 0.3541, 0.8097, 0.9944, 1.1388, 1.2994],
        [0.1839, 0.2055, 0.2289, 0.2554, 0.3861, 0.8190, 0.9940, 1.1435, 1.2931],
        [0.1904, 0.2145, 0.2390, 0.2732, 0.4382, 0.8349, 1.0229, 1.1773, 1.3180],
        [0.1847, 0.2065, 0.2331, 0.2700, 0.4885, 0.8376, 1.0177, 1.1563, 1.3428],
        [0.1855, 0.2093, 0.2337, 0.2711, 0.5130, 0.9495, 1.0695, 1.1737, 1.3018],
        [0.1790, 0.2068, 0.2338, 0.2697, 0.5051, 1.0185, 1.1715, 1.2633, 1.3633],
        [0.1842, 0.2056, 0.2328, 0.2703, 0.5125, 0.9976, 1.1407, 1.2756, 1.4470],
    ],
    [
        [0.1425, 0.1540, 0.1653, 0.1810, 0.3716, 0.8198, 0.9261, 1.0051, 1.0901],
        [0.1630, 0.1761, 0.1890, 0.2057, 0.3427, 0.8092, 0.9387, 1.0327, 1.1123],
        [0.1825, 0.2037, 0.2226, 0.2447, 0.3606, 0.8098, 0.9338, 1.0295, 1.1133],
        [0.1830, 0.2097, 0.2336, 0.2612, 0.3874, 0.7935, 0.9139, 1.0048, 1.1034],
        [0.1781, 0.2053, 0.2322, 0.2675, 0.4321, 0.7759, 0.9082, 1.0007, 1.0829],
        [0.1846, 0.2082, 0.2303, 0.2650, 0.4843, 0.8084, 0.9138, 0.9976, 1.1159],
        [0.1867, 0.2127, 0.2394, 0.2788, 0.5182, 0.9323, 1.0226, 1.1002, 1.1796],
        [0.1855, 0.2093, 0.2337, 0.2711, 0.5130, 0.9495, 1.0695, 1.1737, 1.3018],
        [0.1818, 0.2039, 0.2334, 0.2734, 0.5171, 0.9545, 1.0840, 1.2131, 1.3735],
    ],
    [
        [0.1443, 0.1538, 0.1649, 0.1803, 0.3620, 0.6464, 0.7068, 0.7550, 0.8098],
        [0.1640, 0.1775, 0.1906, 0.2066, 0.3413, 0.6370, 0.6984, 0.7504, 0.8081],
        [0.1841, 0.2037, 0.2202, 0.2418, 0.3540, 0.6188, 0.6825, 0.7291, 0.7958],
        [0.1811, 0.2066, 0.2300, 0.2579, 0.3844, 0.6107, 0.6711, 0.7308, 0.7909],
        [0.1779, 0.2061, 0.2306, 0.2675, 0.4307, 0.6299, 0.6872, 0.7347, 0.7938],
        [0.1867, 0.2110, 0.2369, 0.2725, 0.4836, 0.6962, 0.7504, 0.7868, 0.8385],
        [0.1846, 0.2082, 0.2303, 0.2650, 0.4843, 0.8084, 0.9138, 0.9976, 1.1159],
        [0.1847, 0.2065, 0.2331, 0.2700, 0.4885, 0.8376, 1.0177, 1.1563, 1.3428],
        [0.1808, 0.2063, 0.2321, 0.2663, 0.4839, 0.8312, 1.0010, 1.1687, 1.3503],
    ],
    [
        [0.1425, 0.1535, 0.1644, 0.1817, 0.3349, 0.4990, 0.5437, 0.5802, 0.6158],
        [0.1619, 0.1770, 0.1901, 0.2048, 0.3196, 0.4951, 0.5397, 0.5754, 0.6133],
        [0.1761, 0.1961, 0.2174, 0.2414, 0.3437, 0.4916, 0.5360, 0.5770, 0.6169],
        [0.1814, 0.2030, 0.2277, 0.2564, 0.3716, 0.5032, 0.5411, 0.5757, 0.6149],
        [0.1801, 0.2033, 0.2269, 0.2575, 0.4052, 0.5418, 0.5789, 0.6109, 0.6408],
        [0.1779, 0.2061, 0.2306, 0.2675, 0.4307, 0.6299, 0.6872, 0.7347, 0.7938],
        [0.1781, 0.2053, 0.2322, 0.2675, 0.4321, 0.7759, 0.9082, 1.0007, 1.0829],
        [0.1904, 0.2145, 0.2390, 0.2732, 0.4382, 0.8349, 1.0229, 1.1773, 1.3180],
        [0.1900, 0.2100, 0.2357, 0.2721, 0.4341, 0.7969, 1.0224, 1.1775, 1.3749],
    ],
    [
        [0.1417, 0.1518, 0.1639, 0.1801, 0.2866, 0.4015, 0.4340, 0.4615, 0.4971],
        [0.1642, 0.1766, 0.1891, 0.2037, 0.2881, 0.4057, 0.4379, 0.4651, 0.4965],
        [0.1798, 0.1972, 0.2167, 0.2381, 0.3171, 0.4116, 0.4402, 0.4650, 0.5004],
        [0.1831, 0.2036, 0.2254, 0.2512, 0.3428, 0.4396, 0.4665, 0.4892, 0.5157],
        [0.1814, 0.2030, 0.2277, 0.2564, 0.3716, 0.5032, 0.5411, 0.5757, 0.6149],
        [0.1811, 0.2066, 0.2300, 0.2579, 0.3844, 0.6107, 0.6711, 0.7308, 0.7909],
        [0.1830, 0.2097, 0.2336, 0.2612, 0.3874, 0.7935, 0.9139, 1.0048, 1.1034],
        [0.1839, 0.2055, 0.2289, 0.2554, 0.3861, 0.8190, 0.9940, 1.1435, 1.2931],
        [0.1855, 0.2062, 0.2285, 0.2584, 0.3882, 0.8208, 1.0003, 1.1902, 1.3957],
    ],
    [
        [0.1428, 0.1521, 0.1619, 0.1789, 0.2550, 0.3404, 0.3660, 0.3901, 0.4142],
        [0.1638, 0.1764, 0.1895, 0.2034, 0.2639, 0.3451, 0.3710, 0.3892, 0.4118],
        [0.1750, 0.1920, 0.2081, 0.2271, 0.2978, 0.3721, 0.3950, 0.4158, 0.4385],
        [0.1798, 0.1972, 0.2167, 0.2381, 0.3171, 0.4116, 0.4402, 0.4650, 0.5004],
        [0.1761, 0.1961, 0.2174, 0.2414, 0.3437, 0.4916, 0.5360, 0.5770, 0.6169],
        [0.1841, 0.2037, 0.2202, 0.2418, 0.3540, 0.6188, 0.6825, 0.7291, 0.7958],
        [0.1825, 0.2037, 0.2226, 0.2447, 0.3606, 0.8098, 0.9338, 1.0295, 1.1133],
        [0.1788, 0.1998, 0.2183, 0.2427, 0.3541, 0.8097, 0.9944, 1.1388, 1.2994],
        [0.1777, 0.1997, 0.2191, 0.2425, 0.3565, 0.8110, 0.9856, 1.1506, 1.3163],
    ],
    [
        [0.1386, 0.1470, 0.1545, 0.1635, 0.2001, 0.2466, 0.2616, 0.2746, 0.2909],
        [0.1550, 0.1646, 0.1738, 0.1837, 0.2238, 0.2693, 0.2834, 0.2971, 0.3143],
        [0.1638, 0.1764, 0.1895, 0.2034, 0.2639, 0.3451, 0.3710, 0.3892, 0.4118],
        [0.1642, 0.1766, 0.1891, 0.2037, 0.2881, 0.4057, 0.4379, 0.4651, 0.4965],
        [0.1619, 0.1770, 0.1901, 0.2048, 0.3196, 0.4951, 0.5397, 0.5754, 0.6133],
        [0.1640, 0.1775, 0.1906, 0.2066, 0.3413, 0.6370, 0.6984, 0.7504, 0.8081],
        [0.1630, 0.1761, 0.1890, 0.2057, 0.3427, 0.8092, 0.9387, 1.0327, 1.1123],
        [0.1629, 0.1751, 0.1881, 0.2043, 0.3401, 0.8379, 1.0092, 1.1481, 1.3094],
        [0.1626, 0.1751, 0.1876, 0.2061, 0.3408, 0.8532, 1.0441, 1.2168, 1.4218],
    ],
    [
        [0.1281, 0.1342, 0.1398, 0.1456, 0.1701, 0.2003, 0.2116, 0.2204, 0.2317],
        [0.1386, 0.1470, 0.1545, 0.1635, 0.2001, 0.2466, 0.2616, 0.2746, 0.2909],
        [0.1428, 0.1521, 0.1619, 0.1789, 0.2550, 0.3404, 0.3660, 0.3901, 0.4142],
        [0.1417, 0.1518, 0.1639, 0.1801, 0.2866, 0.4015, 0.4340, 0.4615, 0.4971],
        [0.1425, 0.1535, 0.1644, 0.1817, 0.3349, 0.4990, 0.5437, 0.5802, 0.6158],
        [0.1443, 0.1538, 0.1649, 0.1803, 0.3620, 0.6464, 0.7068, 0.7550, 0.8098],
        [0.1425, 0.1540, 0.1653, 0.1810, 0.3716, 0.8198, 0.9261, 1.0051, 1.0901],
        [0.1437, 0.1524, 0.1635, 0.1790, 0.3671, 0.8760, 1.0402, 1.1675, 1.2997],
        [0.1410, 0.1515, 0.1627, 0.1802, 0.3678, 0.8892, 1.0615, 1.2469, 1.4665],
    ],
];

/// MZt quantiles under ERS GLS detrending.
#[rustfmt::skip]
pub const GLS_ERS_MZ_T: QuantileTable = [
    [
        [-3.4534, -3.2079, -2.9597, -2.6547, -1.0451, 0.5996, 1.0896, 1.4431, 1.8397],
        [-2.9839, -2.7462, -2.5566, -2.3089, -1.1991, 0.5556, 1.0468, 1.3550, 1.8193],
        [-2.6840, -2.3776, -2.1424, -1.9423, -1.1661, 0.3845, 0.8218, 1.2304, 1.6364],
        [-2.6137, -2.2873, -2.0371, -1.7984, -1.0633, 0.3330, 0.8047, 1.2789, 1.7330],
        [-2.4911, -2.2249, -1.9690, -1.6691, -0.8860, 0.3478, 0.8534, 1.2866, 1.7319],
        [-2.6274, -2.2650, -1.9963, -1.7121, -0.7009, 0.2705, 0.7736, 1.1531, 1.5856],
        [-2.5902, -2.2795, -2.0004, -1.6644, -0.5387, 0.5809, 0.8877, 1.2183, 1.6324],
        [-2.6327, -2.2723, -1.9693, -1.6669, -0.5782, 0.7237, 1.0446, 1.3206, 1.5708],
        [-2.6313, -2.3041, -2.0078, -1.6830, -0.5844, 0.8036, 1.1825, 1.5438, 1.9146],
    ],
    [
        [-3.4009, -3.1925, -2.9587, -2.6833, -1.0270, 0.5233, 0.8631, 1.1484, 1.4480],
        [-2.9956, -2.7487, -2.5508, -2.3291, -1.1973, 0.4700, 0.8351, 1.1202, 1.4507],
        [-2.7216, -2.3925, -2.1517, -1.9268, -1.1771, 0.3810, 0.8017, 1.0729, 1.3465],
        [-2.5623, -2.2990, -2.0537, -1.7953, -1.0396, 0.3521, 0.7346, 0.9995, 1.2763],
        [-2.5236, -2.2027, -1.9522, -1.6628, -0.8620, 0.3472, 0.7050, 1.0291, 1.3081],
        [-2.5943, -2.2863, -2.0072, -1.6769, -0.6812, 0.3215, 0.7658, 1.0009, 1.2648],
        [-2.5668, -2.2752, -1.9720, -1.6391, -0.5837, 0.5119, 0.7604, 0.9857, 1.2030],
        [-2.6922, -2.2764, -1.9792, -1.6524, -0.5932, 0.7305, 1.0252, 1.2263, 1.4058],
        [-2.6327, -2.2723, -1.9693, -1.6669, -0.5782, 0.7237, 1.0446, 1.3206, 1.5708],
    ],
    [
        [-3.4230, -3.1484, -2.9361, -2.6597, -1.0094, 0.3419, 0.5671, 0.7573, 0.9788],
        [-2.9825, -2.7579, -2.5318, -2.3117, -1.1848, 0.2799, 0.5445, 0.6948, 0.9075],
        [-2.6377, -2.3402, -2.1187, -1.9154, -1.1439, 0.2128, 0.4670, 0.6248, 0.8351],
        [-2.5826, -2.2632, -2.0134, -1.7926, -1.0442, 0.1726, 0.4398, 0.6316, 0.7850],
        [-2.6801, -2.2838, -1.9965, -1.6927, -0.8827, 0.1278, 0.4123, 0.5776, 0.7264],
        [-2.5869, -2.2751, -2.0033, -1.7090, -0.7273, 0.1547, 0.4249, 0.6207, 0.8592],
        [-2.5417, -2.2250, -1.9235, -1.6213, -0.5571, 0.4221, 0.5882, 0.7208, 0.8882],
        [-2.5668, -2.2752, -1.9720, -1.6391, -0.5837, 0.5119, 0.7604, 0.9857, 1.2030],
        [-2.5902, -2.2795, -2.0004, -1.6644, -0.5387, 0.5809, 0.8877, 1.2183, 1.6324],
    ],
    [
        [-3.3685, -3.1666, -2.9541, -2.6586, -1.0924, -0.1896, -0.0376, 0.0722, 0.1941],
        [-2.9552, -2.7160, -2.5218, -2.2978, -1.2039, -0.2312, -0.0708, 0.0344, 0.1305],
        [-2.6155, -2.3229, -2.1290, -1.9262, -1.1806, -0.2838, -0.1154, -0.0212, 0.0965],
        [-2.6530, -2.2907, -2.0469, -1.7827, -1.0661, -0.2888, -0.1174, -0.0151, 0.0795],
        [-2.6369, -2.2840, -2.0049, -1.7013, -0.9190, -0.3019, -0.1352, -0.0277, 0.0732],
        [-2.5386, -2.2214, -1.9581, -1.6205, -0.7675, -0.1410, -0.0302, 0.0451, 0.1359],
        [-2.5869, -2.2751, -2.0033, -1.7090, -0.7273, 0.1547, 0.4249, 0.6207, 0.8592],
        [-2.5943, -2.2863, -2.0072, -1.6769, -0.6812, 0.3215, 0.7658, 1.0009, 1.2648],
        [-2.6274, -2.2650, -1.9963, -1.7121, -0.7009, 0.2705, 0.7736, 1.1531, 1.5856],
    ],
    [
        [-3.4417, -3.1789, -2.9444, -2.6517, -1.2913, -0.6327, -0.5189, -0.4230, -0.3385],
        [-2.9973, -2.7164, -2.5397, -2.3278, -1.3558, -0.6736, -0.5239, -0.4320, -0.3461],
        [-2.7341, -2.4121, -2.1815, -1.9322, -1.2593, -0.6769, -0.5463, -0.4334, -0.3287],
        [-2.6489, -2.2805, -2.0638, -1.7997, -1.1556, -0.6529, -0.5251, -0.4264, -0.3441],
        [-2.6448, -2.3323, -2.0496, -1.7538, -1.0219, -0.5433, -0.4297, -0.3587, -0.3017],
        [-2.6369, -2.2840, -2.0049, -1.7013, -0.9190, -0.3019, -0.1352, -0.0277, 0.0732],
        [-2.6801, -2.2838, -1.9965, -1.6927, -0.8827, 0.1278, 0.4123, 0.5776, 0.7264],
        [-2.5236, -2.2027, -1.9522, -1.6628, -0.8620, 0.3472, 0.7050, 1.0291, 1.3081],
        [-2.4911, -2.2249, -1.9690, -1.6691, -0.8860, 0.3478, 0.8534, 1.2866, 1.7319],
    ],
    [
        [-3.4693, -3.2015, -2.9370, -2.6645, -1.5779, -0.9844, -0.8466, -0.7537, -0.6436],
        [-2.9419, -2.7159, -2.5341, -2.3433, -1.5744, -0.9844, -0.8643, -0.7717, -0.6765],
        [-2.6717, -2.3730, -2.1793, -1.9815, -1.4077, -0.9518, -0.8403, -0.7464, -0.6522],
        [-2.6823, -2.3468, -2.1081, -1.8440, -1.2773, -0.8443, -0.7409, -0.6619, -0.5857],
        [-2.6489, -2.2805, -2.0638, -1.7997, -1.1556, -0.6529, -0.5251, -0.4264, -0.3441],
        [-2.6530, -2.2907, -2.0469, -1.7827, -1.0661, -0.2888, -0.1174, -0.0151, 0.0795],
        [-2.5826, -2.2632, -2.0134, -1.7926, -1.0442, 0.1726, 0.4398, 0.6316, 0.7850],
        [-2.5623, -2.2990, -2.0537, -1.7953, -1.0396, 0.3521, 0.7346, 0.9995, 1.2763],
        [-2.6137, -2.2873, -2.0371, -1.7984, -1.0633, 0.3330, 0.8047, 1.2789, 1.7330],
    ],
    [
        [-3.4315, -3.2074, -2.9839, -2.6962, -1.8229, -1.2796, -1.1558, -1.0588, -0.9606],
        [-2.9463, -2.7413, -2.5468, -2.3545, -1.7542, -1.2535, -1.1292, -1.0327, -0.9309],
        [-2.7565, -2.4826, -2.2720, -2.0810, -1.5295, -1.1072, -1.0169, -0.9305, -0.8304],
        [-2.6717, -2.3730, -2.1793, -1.9815, -1.4077, -0.9518, -0.8403, -0.7464, -0.6522],
        [-2.7341, -2.4121, -2.1815, -1.9322, -1.2593, -0.6769, -0.5463, -0.4334, -0.3287],
        [-2.6155, -2.3229, -2.1290, -1.9262, -1.1806, -0.2838, -0.1154, -0.0212, 0.0965],
        [-2.6377, -2.3402, -2.1187, -1.9154, -1.1439, 0.2128, 0.4670, 0.6248, 0.8351],
        [-2.7216, -2.3925, -2.1517, -1.9268, -1.1771, 0.3810, 0.8017, 1.0729, 1.3465],
        [-2.6840, -2.3776, -2.1424, -1.9423, -1.1661, 0.3845, 0.8218, 1.2304, 1.6364],
    ],
    [
        [-3.5554, -3.2975, -3.1425, -2.9687, -2.4019, -1.8998, -1.7785, -1.6765, -1.5634],
        [-3.1427, -2.9467, -2.8110, -2.6328, -2.1255, -1.7073, -1.5988, -1.5069, -1.4221],
        [-2.9463, -2.7413, -2.5468, -2.3545, -1.7542, -1.2535, -1.1292, -1.0327, -0.9309],
        [-2.9419, -2.7159, -2.5341, -2.3433, -1.5744, -0.9844, -0.8643, -0.7717, -0.6765],
        [-2.9973, -2.7164, -2.5397, -2.3278, -1.3558, -0.6736, -0.5239, -0.4320, -0.3461],
        [-2.9552, -2.7160, -2.5218, -2.2978, -1.2039, -0.2312, -0.0708, 0.0344, 0.1305],
        [-2.9825, -2.7579, -2.5318, -2.3117, -1.1848, 0.2799, 0.5445, 0.6948, 0.9075],
        [-2.9956, -2.7487, -2.5508, -2.3291, -1.1973, 0.4700, 0.8351, 1.1202, 1.4507],
        [-2.9839, -2.7462, -2.5566, -2.3089, -1.1991, 0.5556, 1.0468, 1.3550, 1.8193],
    ],
    [
        [-3.8316, -3.6692, -3.5231, -3.3599, -2.8533, -2.3868, -2.2589, -2.1671, -2.0473],
        [-3.5554, -3.2975, -3.1425, -2.9687, -2.4019, -1.8998, -1.7785, -1.6765, -1.5634],
        [-3.4315, -3.2074, -2.9839, -2.6962, -1.8229, -1.2796, -1.1558, -1.0588, -0.9606],
        [-3.4693, -3.2015, -2.9370, -2.6645, -1.5779, -0.9844, -0.8466, -0.7537, -0.6436],
        [-3.4417, -3.1789, -2.9444, -2.6517, -1.2913, -0.6327, -0.5189, -0.4230, -0.3385],
        [-3.3685, -3.1666, -2.9541, -2.6586, -1.0924, -0.1896, -0.0376, 0.0722, 0.1941],
        [-3.4230, -3.1484, -2.9361, -2.6597, -1.0094, 0.3419, 0.5671, 0.7573, 0.9788],
        [-3.4009, -3.1925, -2.9587, -2.6833, -1.0270, 0.5233, 0.8631, 1.1484, 1.4480],
        [-3.4534, -3.2079, -2.9597, -2.6547, -1.0451, 0.5996, 1.0896, 1.4431, 1.8397],
    ],
];

/// PT quantiles under ERS GLS detrending.
#[rustfmt::skip]
pub const GLS_ERS_PT: QuantileTable = [
    [
        [1.0984, 1.2576, 1.4994, 1.8572, 8.6198, 51.1770, 75.2793, 101.1614, 134.9398],
        [1.4695, 1.7150, 1.9736, 2.3995, 7.1855, 48.3900, 70.8693, 95.9302, 133.2059],
        [1.7810, 2.2372, 2.7557, 3.3112, 7.5294, 42.3379, 62.0019, 85.5493, 111.5867],
        [1.8830, 2.4145, 3.0190, 3.7851, 8.7408, 42.1450, 65.8947, 90.9701, 125.1172],
        [2.0744, 2.5696, 3.2185, 4.3111, 11.0884, 40.4189, 66.4230, 94.5782, 122.6926],
        [1.8674, 2.4858, 3.1403, 4.1726, 14.2418, 42.6723, 63.1552, 88.1510, 117.9039],
        [1.9176, 2.4990, 3.1081, 4.3434, 16.8197, 56.1702, 72.0441, 91.2307, 122.9140],
        [1.9001, 2.5118, 3.2229, 4.3033, 16.2230, 62.9395, 80.6647, 102.6935, 130.0118],
        [1.8535, 2.4566, 3.1161, 4.2452, 16.1933, 66.6770, 92.6851, 117.4962, 151.2678],
    ],
    [
        [1.1436, 1.2943, 1.5115, 1.7995, 8.5472, 50.0640, 69.9463, 84.0457, 101.8488],
        [1.4177, 1.7021, 1.9779, 2.3571, 7.1116, 44.8919, 65.3745, 80.9217, 105.5652],
        [1.7821, 2.2099, 2.7477, 3.3529, 7.4560, 42.7027, 61.9637, 82.3884, 103.2677],
        [1.9446, 2.4236, 2.9560, 3.8040, 8.8145, 43.4722, 64.3728, 80.2438, 101.5497],
        [1.9969, 2.6731, 3.2759, 4.3492, 11.1736, 44.3907, 66.6580, 84.7558, 102.4189],
        [1.9429, 2.4449, 3.1193, 4.2779, 14.5239, 43.5648, 65.6474, 83.3511, 105.7420],
        [2.0012, 2.4732, 3.2110, 4.4282, 16.4544, 55.3248, 69.3488, 81.7351, 103.4883],
        [1.7544, 2.4652, 3.1675, 4.3781, 15.6350, 66.1550, 84.4592, 97.6245, 112.5867],
        [1.9001, 2.5118, 3.2229, 4.3033, 16.2230, 62.9395, 80.6647, 102.6935, 130.0118],
    ],
    [
        [1.1272, 1.3245, 1.5359, 1.8374, 8.8497, 40.9927, 51.5533, 60.6366, 70.1879],
        [1.4604, 1.7055, 2.0015, 2.3901, 7.2823, 40.3881, 53.2987, 62.3473, 73.0503],
        [1.8892, 2.3185, 2.7776, 3.3730, 7.7340, 40.2311, 52.0117, 63.1685, 72.0727],
        [1.9643, 2.4777, 3.0565, 3.8072, 8.7939, 37.7772, 50.0394, 60.3897, 71.3267],
        [1.8088, 2.5024, 3.1460, 4.2108, 11.0532, 37.4838, 48.9442, 59.4672, 69.0656],
        [1.9031, 2.4894, 3.1118, 4.1377, 14.1121, 39.4696, 49.8797, 59.0967, 71.6367],
        [2.0233, 2.5525, 3.3449, 4.5445, 16.8965, 51.5741, 61.4411, 70.5684, 80.2078],
        [2.0012, 2.4732, 3.2110, 4.4282, 16.4544, 55.3248, 69.3488, 81.7351, 103.4883],
        [1.9176, 2.4990, 3.1081, 4.3434, 16.8197, 56.1702, 72.0441, 91.2307, 122.9140],
    ],
    [
        [1.1456, 1.3205, 1.5012, 1.8462, 8.2607, 24.2237, 29.1387, 33.0786, 38.3585],
        [1.4814, 1.7576, 2.0091, 2.4181, 7.2012, 23.0683, 28.1028, 33.1850, 37.3709],
        [1.9066, 2.3354, 2.7673, 3.3637, 7.3658, 22.3424, 26.4613, 30.6095, 36.1434],
        [1.8749, 2.4285, 2.9740, 3.8383, 8.5629, 21.4736, 26.1920, 30.3589, 35.5966],
        [1.9005, 2.4610, 3.1088, 4.1881, 10.7871, 22.8953, 26.9566, 31.1356, 36.1883],
        [2.0396, 2.5711, 3.2365, 4.5414, 13.7965, 27.4679, 31.7774, 35.4913, 40.5129],
        [1.9031, 2.4894, 3.1118, 4.1377, 14.1121, 39.4696, 49.8797, 59.0967, 71.6367],
        [1.9429, 2.4449, 3.1193, 4.2779, 14.5239, 43.5648, 65.6474, 83.3511, 105.7420],
        [1.8674, 2.4858, 3.1403, 4.1726, 14.2418, 42.6723, 63.1552, 88.1510, 117.9039],
    ],
    [
        [1.1150, 1.3174, 1.5106, 1.8676, 6.6044, 14.1814, 16.6673, 19.0599, 21.7539],
        [1.4501, 1.7522, 2.0146, 2.3606, 6.0611, 13.9292, 16.3603, 18.7065, 21.2791],
        [1.7298, 2.1922, 2.6740, 3.3164, 6.8106, 13.7547, 16.4765, 18.7967, 21.6257],
        [1.8563, 2.4759, 2.9436, 3.7818, 7.8312, 14.5591, 16.6181, 18.7575, 20.8680],
        [1.8951, 2.3161, 2.9985, 3.9659, 9.4121, 16.5091, 19.1350, 21.2225, 23.3388],
        [1.9005, 2.4610, 3.1088, 4.1881, 10.7871, 22.8953, 26.9566, 31.1356, 36.1883],
        [1.8088, 2.5024, 3.1460, 4.2108, 11.0532, 37.4838, 48.9442, 59.4672, 69.0656],
        [1.9969, 2.6731, 3.2759, 4.3492, 11.1736, 44.3907, 66.6580, 84.7558, 102.4189],
        [2.0744, 2.5696, 3.2185, 4.3111, 11.0884, 40.4189, 66.4230, 94.5782, 122.6926],
    ],
    [
        [1.0827, 1.2789, 1.4998, 1.8376, 4.7424, 9.1692, 10.6663, 12.2249, 13.7315],
        [1.4630, 1.7629, 1.9995, 2.3454, 4.7674, 9.3503, 10.8212, 12.2126, 13.6073],
        [1.7601, 2.2809, 2.6434, 3.1812, 5.7135, 9.6313, 11.0048, 12.2928, 14.0030],
        [1.7678, 2.3110, 2.8248, 3.6188, 6.7018, 10.9108, 12.3639, 13.6885, 15.1371],
        [1.8563, 2.4759, 2.9436, 3.7818, 7.8312, 14.5591, 16.6181, 18.7575, 20.8680],
        [1.8749, 2.4285, 2.9740, 3.8383, 8.5629, 21.4736, 26.1920, 30.3589, 35.5966],
        [1.9643, 2.4777, 3.0565, 3.8072, 8.7939, 37.7772, 50.0394, 60.3897, 71.3267],
        [1.9446, 2.4236, 2.9560, 3.8040, 8.8145, 43.4722, 64.3728, 80.2438, 101.5497],
        [1.8830, 2.4145, 3.0190, 3.7851, 8.7408, 42.1450, 65.8947, 90.9701, 125.1172],
    ],
    [
        [1.1176, 1.2704, 1.4712, 1.7850, 3.6947, 6.5231, 7.5200, 8.3871, 9.5130],
        [1.4817, 1.7146, 1.9616, 2.2933, 3.9412, 6.7479, 7.7279, 8.6096, 9.5244],
        [1.7031, 2.0867, 2.4679, 2.9055, 4.9791, 7.8891, 8.8474, 9.8411, 10.9008],
        [1.7601, 2.2809, 2.6434, 3.1812, 5.7135, 9.6313, 11.0048, 12.2928, 14.0030],
        [1.7298, 2.1922, 2.6740, 3.3164, 6.8106, 13.7547, 16.4765, 18.7967, 21.6257],
        [1.9066, 2.3354, 2.7673, 3.3637, 7.3658, 22.3424, 26.4613, 30.6095, 36.1434],
        [1.8892, 2.3185, 2.7776, 3.3730, 7.7340, 40.2311, 52.0117, 63.1685, 72.0727],
        [1.7821, 2.2099, 2.7477, 3.3529, 7.4560, 42.7027, 61.9637, 82.3884, 103.2677],
        [1.7810, 2.2372, 2.7557, 3.3112, 7.5294, 42.3379, 62.0019, 85.5493, 111.5867],
    ],
    [
        [1.0330, 1.1807, 1.3075, 1.4736, 2.2456, 3.4398, 3.8519, 4.2465, 4.7253],
        [1.3125, 1.4881, 1.6395, 1.8401, 2.8069, 4.1076, 4.5916, 5.0139, 5.5227],
        [1.4817, 1.7146, 1.9616, 2.2933, 3.9412, 6.7479, 7.7279, 8.6096, 9.5244],
        [1.4630, 1.7629, 1.9995, 2.3454, 4.7674, 9.3503, 10.8212, 12.2126, 13.6073],
        [1.4501, 1.7522, 2.0146, 2.3606, 6.0611, 13.9292, 16.3603, 18.7065, 21.2791],
        [1.4814, 1.7576, 2.0091, 2.4181, 7.2012, 23.0683, 28.1028, 33.1850, 37.3709],
        [1.4604, 1.7055, 2.0015, 2.3901, 7.2823, 40.3881, 53.2987, 62.3473, 73.0503],
        [1.4177, 1.7021, 1.9779, 2.3571, 7.1116, 44.8919, 65.3745, 80.9217, 105.5652],
        [1.4695, 1.7150, 1.9736, 2.3995, 7.1855, 48.3900, 70.8693, 95.9302, 133.2059],
    ],
    [
        [0.8826, 0.9630, 1.0321, 1.1446, 1.6243, 2.2995, 2.5261, 2.7467, 3.0099],
        [1.0330, 1.1807, 1.3075, 1.4736, 2.2456, 3.4398, 3.8519, 4.2465, 4.7253],
        [1.1176, 1.2704, 1.4712, 1.7850, 3.6947, 6.5231, 7.5200, 8.3871, 9.5130],
        [1.0827, 1.2789, 1.4998, 1.8376, 4.7424, 9.1692, 10.6663, 12.2249, 13.7315],
        [1.1150, 1.3174, 1.5106, 1.8676, 6.6044, 14.1814, 16.6673, 19.0599, 21.7539],
        [1.1456, 1.3205, 1.5012, 1.8462, 8.2607, 24.2237, 29.1387, 33.0786, 38.3585],
        [1.1272, 1.3245, 1.5359, 1.8374, 8.8497, 40.9927, 51.5533, 60.6366, 70.1879],
        [1.1436, 1.2943, 1.5115, 1.7995, 8.5472, 50.0640, 69.9463, 84.0457, 101.8488],
        [1.0984, 1.2576, 1.4994, 1.8572, 8.6198, 51.1770, 75.2793, 101.1614, 134.9398],
    ],
];

/// MZα quantiles under GLS-bounds detrending.
#[rustfmt::skip]
pub const GLS_BOUNDS_MZ_ALPHA: QuantileTable = [
    [
        [-26.0760, -22.4275, -19.2948, -15.5034, -3.2931, 0.5881, 1.1522, 1.6317, 2.1627],
        [-18.8349, -16.1133, -14.0954, -11.5284, -3.6183, 0.6315, 1.1378, 1.5585, 2.0485],
        [-15.0497, -11.8558, -9.8114, -7.9764, -3.2886, 0.4672, 0.9668, 1.3970, 1.9006],
        [-14.1515, -10.9472, -8.8646, -6.9426, -2.7569, 0.3993, 0.9456, 1.3764, 1.8996],
        [-13.0981, -10.5250, -8.4151, -6.0438, -2.0209, 0.4522, 0.9793, 1.3969, 1.8966],
        [-14.7413, -11.0306, -8.5583, -6.2538, -1.3833, 0.3438, 0.8734, 1.2897, 1.7268],
        [-14.0576, -10.8757, -8.4201, -6.0132, -0.9690, 0.6905, 1.0749, 1.4878, 1.9805],
        [-14.0443, -10.8520, -8.3158, -6.0981, -1.0547, 0.8252, 1.2007, 1.5031, 1.9250],
        [-14.2477, -11.1697, -8.7159, -6.2079, -1.0517, 0.9292, 1.3032, 1.6508, 2.0551],
    ],
    [
        [-25.1595, -22.2550, -19.0371, -15.9129, -3.2537, 0.4625, 0.9369, 1.3550, 1.8731],
        [-18.6530, -15.9778, -14.1724, -11.7545, -3.6417, 0.4589, 0.9620, 1.3910, 1.9442],
        [-15.3010, -11.9941, -9.8697, -7.9111, -3.3474, 0.4590, 0.8986, 1.3474, 1.8100],
        [-13.8198, -11.1077, -8.8738, -6.9929, -2.7184, 0.4129, 0.8321, 1.2246, 1.6755],
        [-13.1424, -10.2679, -8.0805, -5.9970, -1.9584, 0.4123, 0.8116, 1.1906, 1.6180],
        [-13.8177, -11.0200, -8.4677, -6.1329, -1.3292, 0.3865, 0.8385, 1.1843, 1.6512],
        [-13.9761, -10.7813, -8.2312, -5.8471, -1.0556, 0.6270, 0.9784, 1.2757, 1.5674],
        [-15.1063, -10.8903, -8.3230, -6.0491, -1.1099, 0.8076, 1.1756, 1.4649, 1.8789],
        [-14.0443, -10.8520, -8.3158, -6.0981, -1.0547, 0.8252, 1.2007, 1.5031, 1.9250],
    ],
    [
        [-25.2987, -21.6277, -18.9460, -15.5000, -3.1978, 0.2295, 0.6059, 0.9842, 1.6760],
        [-18.6392, -16.1100, -13.8425, -11.6881, -3.5581, 0.2570, 0.6135, 0.9544, 1.4949],
        [-14.4838, -11.4418, -9.4959, -7.8327, -3.1849, 0.2706, 0.5916, 0.8526, 1.2335],
        [-14.0642, -10.9211, -8.6051, -6.8343, -2.7060, 0.1965, 0.5357, 0.8644, 1.2645],
        [-14.9975, -11.0157, -8.5293, -6.2091, -2.0085, 0.1542, 0.5111, 0.7530, 1.1206],
        [-13.6877, -11.0122, -8.5680, -6.3905, -1.4036, 0.1903, 0.5327, 0.8169, 1.2209],
        [-13.6809, -10.3463, -7.8725, -5.7147, -0.9754, 0.5241, 0.7605, 1.0214, 1.4531],
        [-13.9761, -10.7813, -8.2312, -5.8471, -1.0556, 0.6270, 0.9784, 1.2757, 1.5674],
        [-14.0576, -10.8757, -8.4201, -6.0132, -0.9690, 0.6905, 1.0749, 1.4878, 1.9805],
    ],
    [
        [-24.5452, -21.9305, -19.3139, -15.5889, -3.4729, -0.7582, -0.4250, -0.2017, 0.0536],
        [-18.5027, -15.6313, -13.6505, -11.5757, -3.6353, -0.5718, -0.2878, -0.0818, 0.0877],
        [-14.2553, -11.3139, -9.5769, -7.9030, -3.3740, -0.5385, -0.2338, -0.0706, 0.1087],
        [-14.3840, -10.9575, -8.8013, -6.8724, -2.8027, -0.5429, -0.2235, -0.0525, 0.1152],
        [-14.7144, -11.0051, -8.5886, -6.2485, -2.0856, -0.5202, -0.2436, -0.0555, 0.1079],
        [-13.5932, -10.3326, -8.1248, -5.9019, -1.5155, -0.2445, -0.0630, 0.0634, 0.2098],
        [-13.6877, -11.0122, -8.5680, -6.3905, -1.4036, 0.1903, 0.5327, 0.8169, 1.2209],
        [-13.8177, -11.0200, -8.4677, -6.1329, -1.3292, 0.3865, 0.8385, 1.1843, 1.6512],
        [-14.7413, -11.0306, -8.5583, -6.2538, -1.3833, 0.3438, 0.8734, 1.2897, 1.7268],
    ],
    [
        [-25.1229, -21.9144, -18.8845, -15.2777, -4.4119, -2.0151, -1.6281, -1.3280, -1.0913],
        [-18.8901, -15.8588, -13.8455, -11.7174, -4.3960, -1.7066, -1.3168, -1.0952, -0.8244],
        [-15.6345, -12.2106, -9.9880, -7.9368, -3.7035, -1.5200, -1.1615, -0.8865, -0.6204],
        [-14.6687, -11.2510, -9.0352, -6.9567, -3.1360, -1.3888, -1.0810, -0.8650, -0.6690],
        [-14.6375, -11.3909, -8.8964, -6.7570, -2.5034, -1.1163, -0.8428, -0.6794, -0.5302],
        [-14.7144, -11.0051, -8.5886, -6.2485, -2.0856, -0.5202, -0.2436, -0.0555, 0.1079],
        [-14.9975, -11.0157, -8.5293, -6.2091, -2.0085, 0.1542, 0.5111, 0.7530, 1.1206],
        [-13.1424, -10.2679, -8.0805, -5.9970, -1.9584, 0.4123, 0.8116, 1.1906, 1.6180],
        [-13.0981, -10.5250, -8.4151, -6.0438, -2.0209, 0.4522, 0.9793, 1.3969, 1.8966],
    ],
    [
        [-25.9372, -21.9292, -19.2790, -15.4755, -6.1243, -3.3406, -2.8414, -2.4838, -2.0672],
        [-18.0890, -15.7183, -13.8483, -11.8549, -5.6781, -2.8088, -2.3959, -2.0555, -1.7329],
        [-15.2408, -11.9583, -10.1198, -8.3753, -4.5042, -2.4401, -2.0407, -1.7558, -1.4839],
        [-14.6200, -11.3086, -9.3763, -7.2581, -3.7663, -2.0586, -1.7283, -1.4849, -1.2417],
        [-14.6687, -11.2510, -9.0352, -6.9567, -3.1360, -1.3888, -1.0810, -0.8650, -0.6690],
        [-14.3840, -10.9575, -8.8013, -6.8724, -2.8027, -0.5429, -0.2235, -0.0525, 0.1152],
        [-14.0642, -10.9211, -8.6051, -6.8343, -2.7060, 0.1965, 0.5357, 0.8644, 1.2645],
        [-13.8198, -11.1077, -8.8738, -6.9929, -2.7184, 0.4129, 0.8321, 1.2246, 1.6755],
        [-14.1515, -10.9472, -8.8646, -6.9426, -2.7569, 0.3993, 0.9456, 1.3764, 1.8996],
    ],
    [
        [-25.7419, -22.5787, -19.3498, -15.9712, -7.8274, -4.7370, -4.1840, -3.7538, -3.2600],
        [-18.2991, -15.9331, -13.8672, -11.9177, -6.9240, -4.0123, -3.4530, -3.0514, -2.7071],
        [-15.8709, -12.9668, -11.0032, -9.2105, -5.2476, -3.1141, -2.7177, -2.3958, -2.0513],
        [-15.2408, -11.9583, -10.1198, -8.3753, -4.5042, -2.4401, -2.0407, -1.7558, -1.4839],
        [-15.6345, -12.2106, -9.9880, -7.9368, -3.7035, -1.5200, -1.1615, -0.8865, -0.6204],
        [-14.2553, -11.3139, -9.5769, -7.9030, -3.3740, -0.5385, -0.2338, -0.0706, 0.1087],
        [-14.4838, -11.4418, -9.4959, -7.8327, -3.1849, 0.2706, 0.5916, 0.8526, 1.2335],
        [-15.3010, -11.9941, -9.8697, -7.9111, -3.3474, 0.4590, 0.8986, 1.3474, 1.8100],
        [-15.0497, -11.8558, -9.8114, -7.9764, -3.2886, 0.4672, 0.9668, 1.3970, 1.9006],
    ],
    [
        [-26.4345, -23.4620, -21.3757, -18.9627, -12.7579, -8.6028, -7.7454, -7.0211, -6.3194],
        [-20.9536, -18.4024, -16.7534, -15.0074, -10.0909, -6.8176, -6.0908, -5.4689, -4.9478],
        [-18.2991, -15.9331, -13.8672, -11.9177, -6.9240, -4.0123, -3.4530, -3.0514, -2.7071],
        [-18.0890, -15.7183, -13.8483, -11.8549, -5.6781, -2.8088, -2.3959, -2.0555, -1.7329],
        [-18.8901, -15.8588, -13.8455, -11.7174, -4.3960, -1.7066, -1.3168, -1.0952, -0.8244],
        [-18.5027, -15.6313, -13.6505, -11.5757, -3.6353, -0.5718, -0.2878, -0.0818, 0.0877],
        [-18.6392, -16.1100, -13.8425, -11.6881, -3.5581, 0.2570, 0.6135, 0.9544, 1.4949],
        [-18.6530, -15.9778, -14.1724, -11.7545, -3.6417, 0.4589, 0.9620, 1.3910, 1.9442],
        [-18.8349, -16.1133, -14.0954, -11.5284, -3.6183, 0.6315, 1.1378, 1.5585, 2.0485],
    ],
    [
        [-30.5370, -28.3756, -26.1245, -24.1506, -17.6528, -12.6666, -11.2945, -10.3910, -9.4158],
        [-26.4345, -23.4620, -21.3757, -18.9627, -12.7579, -8.6028, -7.7454, -7.0211, -6.3194],
        [-25.7419, -22.5787, -19.3498, -15.9712, -7.8274, -4.7370, -4.1840, -3.7538, -3.2600],
        [-25.9372, -21.9292, -19.2790, -15.4755, -6.1243, -3.3406, -2.8414, -2.4838, -2.0672],
        [-25.1229, -21.9144, -18.8845, -15.2777, -4.4119, -2.0151, -1.6281, -1.3280, -1.0913],
        [-24.5452, -21.9305, -19.3139, -15.5889, -3.4729, -0.7582, -0.4250, -0.2017, 0.0536],
        [-25.2987, -21.6277, -18.9460, -15.5000, -3.1978, 0.2295, 0.6059, 0.9842, 1.6760],
        [-25.1595, -22.2550, -19.0371, -15.9129, -3.2537, 0.4625, 0.9369, 1.3550, 1.8731],
        [-26.0760, -22.4275, -19.2948, -15.5034, -3.2931, 0.5881, 1.1522, 1.6317, 2.1627],
    ],
];

/// MSB quantiles under GLS-bounds detrending.
#[rustfmt::skip]
pub const GLS_BOUNDS_MSB: QuantileTable = [
    [
        [0.1359, 0.1475, 0.1584, 0.1756, 0.3437, 0.7726, 0.9190, 1.0674, 1.2400],
        [0.1599, 0.1721, 0.1853, 0.2024, 0.3318, 0.7982, 0.9743, 1.1255, 1.3225],
        [0.1775, 0.1992, 0.2181, 0.2412, 0.3525, 0.7934, 0.9673, 1.1259, 1.2888],
        [0.1852, 0.2058, 0.2281, 0.2572, 0.3853, 0.8130, 0.9854, 1.1730, 1.3742],
        [0.1899, 0.2098, 0.2354, 0.2715, 0.4322, 0.7925, 1.0143, 1.1697, 1.3630],
        [0.1806, 0.2058, 0.2318, 0.2657, 0.4813, 0.8248, 0.9921, 1.1605, 1.3408],
        [0.1817, 0.2038, 0.2331, 0.2727, 0.5153, 0.9502, 1.0789, 1.2062, 1.3669],
        [0.1842, 0.2054, 0.2327, 0.2700, 0.5115, 0.9953, 1.1380, 1.2727, 1.4430],
        [0.1799, 0.2049, 0.2292, 0.2679, 0.5108, 1.0220, 1.1997, 1.3543, 1.5563],
    ],
    [
        [0.1390, 0.1476, 0.1589, 0.1741, 0.3402, 0.7626, 0.8958, 0.9996, 1.0994],
        [0.1612, 0.1721, 0.1844, 0.2006, 0.3318, 0.7776, 0.9370, 1.0598, 1.2083],
        [0.1787, 0.1992, 0.2176, 0.2411, 0.3508, 0.7967, 0.9728, 1.1130, 1.2683],
        [0.1837, 0.2047, 0.2281, 0.2546, 0.3831, 0.8080, 0.9799, 1.1258, 1.2742],
        [0.1895, 0.2144, 0.2381, 0.2727, 0.4356, 0.8282, 1.0140, 1.1680, 1.3073],
        [0.1844, 0.2064, 0.2329, 0.2692, 0.4860, 0.8315, 1.0109, 1.1480, 1.3305],
        [0.1855, 0.2089, 0.2336, 0.2708, 0.5113, 0.9441, 1.0640, 1.1681, 1.2974],
        [0.1789, 0.2067, 0.2335, 0.2694, 0.5040, 1.0141, 1.1670, 1.2578, 1.3585],
        [0.1842, 0.2054, 0.2327, 0.2700, 0.5115, 0.9953, 1.1380, 1.2727, 1.4430],
    ],
    [
        [0.1390, 0.1498, 0.1597, 0.1759, 0.3448, 0.7118, 0.7991, 0.8556, 0.9242],
        [0.1605, 0.1738, 0.1854, 0.2012, 0.3342, 0.7535, 0.8732, 0.9504, 1.0258],
        [0.1819, 0.2035, 0.2215, 0.2437, 0.3561, 0.7920, 0.9176, 1.0065, 1.0842],
        [0.1823, 0.2092, 0.2321, 0.2599, 0.3845, 0.7831, 0.8991, 0.9887, 1.0853],
        [0.1779, 0.2049, 0.2321, 0.2670, 0.4303, 0.7716, 0.9007, 0.9922, 1.0732],
        [0.1846, 0.2079, 0.2299, 0.2641, 0.4821, 0.8022, 0.9074, 0.9900, 1.1062],
        [0.1867, 0.2127, 0.2391, 0.2779, 0.5166, 0.9275, 1.0170, 1.0933, 1.1726],
        [0.1855, 0.2089, 0.2336, 0.2708, 0.5113, 0.9441, 1.0640, 1.1681, 1.2974],
        [0.1817, 0.2038, 0.2331, 0.2727, 0.5153, 0.9502, 1.0789, 1.2062, 1.3669],
    ],
    [
        [0.1404, 0.1488, 0.1586, 0.1752, 0.3367, 0.5589, 0.6067, 0.6408, 0.6836],
        [0.1612, 0.1752, 0.1866, 0.2027, 0.3339, 0.5933, 0.6487, 0.6948, 0.7423],
        [0.1838, 0.2030, 0.2192, 0.2406, 0.3512, 0.6090, 0.6685, 0.7140, 0.7792],
        [0.1810, 0.2061, 0.2294, 0.2566, 0.3813, 0.6039, 0.6615, 0.7193, 0.7795],
        [0.1774, 0.2060, 0.2305, 0.2670, 0.4289, 0.6261, 0.6828, 0.7283, 0.7885],
        [0.1861, 0.2107, 0.2365, 0.2718, 0.4812, 0.6907, 0.7439, 0.7804, 0.8307],
        [0.1846, 0.2079, 0.2299, 0.2641, 0.4821, 0.8022, 0.9074, 0.9900, 1.1062],
        [0.1844, 0.2064, 0.2329, 0.2692, 0.4860, 0.8315, 1.0109, 1.1480, 1.3305],
        [0.1806, 0.2058, 0.2318, 0.2657, 0.4813, 0.8248, 0.9921, 1.1605, 1.3408],
    ],
    [
        [0.1388, 0.1494, 0.1602, 0.1766, 0.3136, 0.4373, 0.4712, 0.4965, 0.5298],
        [0.1599, 0.1734, 0.1867, 0.2021, 0.3112, 0.4664, 0.5033, 0.5324, 0.5662],
        [0.1751, 0.1957, 0.2163, 0.2396, 0.3405, 0.4845, 0.5274, 0.5657, 0.6066],
        [0.1813, 0.2026, 0.2267, 0.2556, 0.3683, 0.4958, 0.5329, 0.5668, 0.6036],
        [0.1797, 0.2030, 0.2264, 0.2564, 0.4025, 0.5354, 0.5714, 0.6027, 0.6315],
        [0.1774, 0.2060, 0.2305, 0.2670, 0.4289, 0.6261, 0.6828, 0.7283, 0.7885],
        [0.1779, 0.2049, 0.2321, 0.2670, 0.4303, 0.7716, 0.9007, 0.9922, 1.0732],
        [0.1895, 0.2144, 0.2381, 0.2727, 0.4356, 0.8282, 1.0140, 1.1680, 1.3073],
        [0.1899, 0.2098, 0.2354, 0.2715, 0.4322, 0.7925, 1.0143, 1.1697, 1.3630],
    ],
    [
        [0.1381, 0.1477, 0.1585, 0.1759, 0.2721, 0.3607, 0.3829, 0.4027, 0.4291],
        [0.1626, 0.1739, 0.1859, 0.1996, 0.2823, 0.3848, 0.4113, 0.4332, 0.4609],
        [0.1792, 0.1967, 0.2156, 0.2366, 0.3140, 0.4050, 0.4325, 0.4585, 0.4900],
        [0.1825, 0.2031, 0.2245, 0.2499, 0.3397, 0.4337, 0.4585, 0.4807, 0.5053],
        [0.1813, 0.2026, 0.2267, 0.2556, 0.3683, 0.4958, 0.5329, 0.5668, 0.6036],
        [0.1810, 0.2061, 0.2294, 0.2566, 0.3813, 0.6039, 0.6615, 0.7193, 0.7795],
        [0.1823, 0.2092, 0.2321, 0.2599, 0.3845, 0.7831, 0.8991, 0.9887, 1.0853],
        [0.1837, 0.2047, 0.2281, 0.2546, 0.3831, 0.8080, 0.9799, 1.1258, 1.2742],
        [0.1852, 0.2058, 0.2281, 0.2572, 0.3853, 0.8130, 0.9854, 1.1730, 1.3742],
    ],
    [
        [0.1382, 0.1474, 0.1580, 0.1741, 0.2437, 0.3090, 0.3280, 0.3435, 0.3616],
        [0.1612, 0.1740, 0.1867, 0.1996, 0.2579, 0.3323, 0.3533, 0.3713, 0.3905],
        [0.1742, 0.1910, 0.2073, 0.2257, 0.2950, 0.3676, 0.3904, 0.4098, 0.4314],
        [0.1792, 0.1967, 0.2156, 0.2366, 0.3140, 0.4050, 0.4325, 0.4585, 0.4900],
        [0.1751, 0.1957, 0.2163, 0.2396, 0.3405, 0.4845, 0.5274, 0.5657, 0.6066],
        [0.1838, 0.2030, 0.2192, 0.2406, 0.3512, 0.6090, 0.6685, 0.7140, 0.7792],
        [0.1819, 0.2035, 0.2215, 0.2437, 0.3561, 0.7920, 0.9176, 1.0065, 1.0842],
        [0.1787, 0.1992, 0.2176, 0.2411, 0.3508, 0.7967, 0.9728, 1.1130, 1.2683],
        [0.1775, 0.1992, 0.2181, 0.2412, 0.3525, 0.7934, 0.9673, 1.1259, 1.2888],
    ],
    [
        [0.1362, 0.1433, 0.1512, 0.1598, 0.1939, 0.2341, 0.2473, 0.2579, 0.2703],
        [0.1520, 0.1623, 0.1697, 0.1799, 0.2175, 0.2614, 0.2746, 0.2873, 0.3002],
        [0.1612, 0.1740, 0.1867, 0.1996, 0.2579, 0.3323, 0.3533, 0.3713, 0.3905],
        [0.1626, 0.1739, 0.1859, 0.1996, 0.2823, 0.3848, 0.4113, 0.4332, 0.4609],
        [0.1599, 0.1734, 0.1867, 0.2021, 0.3112, 0.4664, 0.5033, 0.5324, 0.5662],
        [0.1612, 0.1752, 0.1866, 0.2027, 0.3339, 0.5933, 0.6487, 0.6948, 0.7423],
        [0.1605, 0.1738, 0.1854, 0.2012, 0.3342, 0.7535, 0.8732, 0.9504, 1.0258],
        [0.1612, 0.1721, 0.1844, 0.2006, 0.3318, 0.7776, 0.9370, 1.0598, 1.2083],
        [0.1599, 0.1721, 0.1853, 0.2024, 0.3318, 0.7982, 0.9743, 1.1255, 1.3225],
    ],
    [
        [0.1265, 0.1320, 0.1371, 0.1426, 0.1660, 0.1947, 0.2058, 0.2150, 0.2255],
        [0.1362, 0.1433, 0.1512, 0.1598, 0.1939, 0.2341, 0.2473, 0.2579, 0.2703],
        [0.1382, 0.1474, 0.1580, 0.1741, 0.2437, 0.3090, 0.3280, 0.3435, 0.3616],
        [0.1381, 0.1477, 0.1585, 0.1759, 0.2721, 0.3607, 0.3829, 0.4027, 0.4291],
        [0.1388, 0.1494, 0.1602, 0.1766, 0.3136, 0.4373, 0.4712, 0.4965, 0.5298],
        [0.1404, 0.1488, 0.1586, 0.1752, 0.3367, 0.5589, 0.6067, 0.6408, 0.6836],
        [0.1390, 0.1498, 0.1597, 0.1759, 0.3448, 0.7118, 0.7991, 0.8556, 0.9242],
        [0.1390, 0.1476, 0.1589, 0.1741, 0.3402, 0.7626, 0.8958, 0.9996, 1.0994],
        [0.1359, 0.1475, 0.1584, 0.1756, 0.3437, 0.7726, 0.9190, 1.0674, 1.2400],
    ],
];

/// MZt quantiles under GLS-bounds detrending.
#[rustfmt::skip]
pub const GLS_BOUNDS_MZ_T: QuantileTable = [
    [
        [-3.5697, -3.3080, -3.0723, -2.7351, -1.1792, 0.4030, 0.9054, 1.2571, 1.6552],
        [-3.0231, -2.7947, -2.6040, -2.3529, -1.2463, 0.4592, 0.9451, 1.2679, 1.7135],
        [-2.6991, -2.3969, -2.1560, -1.9551, -1.1812, 0.3579, 0.8025, 1.2076, 1.6099],
        [-2.6166, -2.2899, -2.0455, -1.8057, -1.0747, 0.3205, 0.7915, 1.2638, 1.7160],
        [-2.5040, -2.2319, -1.9720, -1.6718, -0.8936, 0.3368, 0.8437, 1.2766, 1.7258],
        [-2.6296, -2.2661, -1.9983, -1.7162, -0.7079, 0.2595, 0.7653, 1.1437, 1.5777],
        [-2.5947, -2.2812, -2.0011, -1.6679, -0.5442, 0.5747, 0.8815, 1.2128, 1.6256],
        [-2.6328, -2.2749, -1.9699, -1.6677, -0.5806, 0.7209, 1.0420, 1.3180, 1.5679],
        [-2.6313, -2.3041, -2.0078, -1.6830, -0.5844, 0.8036, 1.1825, 1.5438, 1.9146],
    ],
    [
        [-3.5015, -3.2883, -3.0444, -2.7848, -1.1666, 0.3247, 0.6621, 0.9548, 1.2796],
        [-3.0487, -2.7744, -2.6014, -2.3783, -1.2481, 0.3763, 0.7381, 1.0379, 1.3596],
        [-2.7350, -2.4146, -2.1601, -1.9366, -1.1933, 0.3619, 0.7800, 1.0473, 1.3263],
        [-2.5646, -2.3075, -2.0592, -1.8023, -1.0536, 0.3384, 0.7169, 0.9812, 1.2584],
        [-2.5263, -2.2044, -1.9545, -1.6671, -0.8689, 0.3363, 0.6972, 1.0200, 1.2985],
        [-2.5944, -2.2893, -2.0074, -1.6809, -0.6881, 0.3109, 0.7558, 0.9909, 1.2566],
        [-2.5670, -2.2792, -1.9763, -1.6404, -0.5887, 0.5055, 0.7540, 0.9808, 1.1978],
        [-2.6928, -2.2777, -1.9836, -1.6588, -0.5955, 0.7260, 1.0200, 1.2214, 1.4024],
        [-2.6328, -2.2749, -1.9699, -1.6677, -0.5806, 0.7209, 1.0420, 1.3180, 1.5679],
    ],
    [
        [-3.5229, -3.2381, -3.0436, -2.7356, -1.1461, 0.1531, 0.3755, 0.5707, 0.8294],
        [-3.0108, -2.8070, -2.5755, -2.3716, -1.2298, 0.1830, 0.4533, 0.6051, 0.8529],
        [-2.6410, -2.3502, -2.1300, -1.9319, -1.1567, 0.1918, 0.4410, 0.6028, 0.8155],
        [-2.5828, -2.2762, -2.0231, -1.7975, -1.0559, 0.1565, 0.4233, 0.6151, 0.7713],
        [-2.6801, -2.2874, -1.9998, -1.6972, -0.8895, 0.1180, 0.4030, 0.5687, 0.7170],
        [-2.5877, -2.2802, -2.0076, -1.7123, -0.7324, 0.1458, 0.4147, 0.6108, 0.8510],
        [-2.5423, -2.2301, -1.9265, -1.6241, -0.5609, 0.4162, 0.5836, 0.7149, 0.8817],
        [-2.5670, -2.2792, -1.9763, -1.6404, -0.5887, 0.5055, 0.7540, 0.9808, 1.1978],
        [-2.5947, -2.2812, -2.0011, -1.6679, -0.5442, 0.5747, 0.8815, 1.2128, 1.6256],
    ],
    [
        [-3.4514, -3.2734, -3.0736, -2.7585, -1.2220, -0.3909, -0.2271, -0.0995, 0.0300],
        [-2.9916, -2.7620, -2.5739, -2.3546, -1.2483, -0.3153, -0.1613, -0.0507, 0.0549],
        [-2.6250, -2.3393, -2.1406, -1.9376, -1.1980, -0.3038, -0.1415, -0.0393, 0.0707],
        [-2.6608, -2.2940, -2.0566, -1.7966, -1.0795, -0.3046, -0.1324, -0.0306, 0.0693],
        [-2.6424, -2.2889, -2.0102, -1.7061, -0.9251, -0.3103, -0.1434, -0.0346, 0.0649],
        [-2.5458, -2.2256, -1.9638, -1.6230, -0.7746, -0.1498, -0.0392, 0.0359, 0.1286],
        [-2.5877, -2.2802, -2.0076, -1.7123, -0.7324, 0.1458, 0.4147, 0.6108, 0.8510],
        [-2.5944, -2.2893, -2.0074, -1.6809, -0.6881, 0.3109, 0.7558, 0.9909, 1.2566],
        [-2.6296, -2.2661, -1.9983, -1.7162, -0.7079, 0.2595, 0.7653, 1.1437, 1.5777],
    ],
    [
        [-3.5339, -3.2728, -3.0277, -2.7138, -1.4189, -0.8278, -0.6987, -0.6061, -0.5141],
        [-3.0287, -2.7612, -2.5899, -2.3722, -1.3998, -0.7517, -0.6187, -0.5294, -0.4271],
        [-2.7458, -2.4226, -2.1924, -1.9446, -1.2756, -0.7000, -0.5699, -0.4569, -0.3534],
        [-2.6573, -2.2944, -2.0757, -1.8117, -1.1702, -0.6706, -0.5394, -0.4472, -0.3584],
        [-2.6467, -2.3411, -2.0541, -1.7594, -1.0336, -0.5547, -0.4448, -0.3751, -0.3203],
        [-2.6424, -2.2889, -2.0102, -1.7061, -0.9251, -0.3103, -0.1434, -0.0346, 0.0649],
        [-2.6801, -2.2874, -1.9998, -1.6972, -0.8895, 0.1180, 0.4030, 0.5687, 0.7170],
        [-2.5263, -2.2044, -1.9545, -1.6671, -0.8689, 0.3363, 0.6972, 1.0200, 1.2985],
        [-2.5040, -2.2319, -1.9720, -1.6718, -0.8936, 0.3368, 0.8437, 1.2766, 1.7258],
    ],
    [
        [-3.5832, -3.2835, -3.0644, -2.7418, -1.6826, -1.1686, -1.0429, -0.9487, -0.8530],
        [-2.9838, -2.7528, -2.5860, -2.3899, -1.6138, -1.0577, -0.9475, -0.8660, -0.7482],
        [-2.6929, -2.3864, -2.1939, -1.9918, -1.4241, -0.9693, -0.8582, -0.7654, -0.6769],
        [-2.6889, -2.3536, -2.1120, -1.8564, -1.2952, -0.8681, -0.7593, -0.6796, -0.6081],
        [-2.6573, -2.2944, -2.0757, -1.8117, -1.1702, -0.6706, -0.5394, -0.4472, -0.3584],
        [-2.6608, -2.2940, -2.0566, -1.7966, -1.0795, -0.3046, -0.1324, -0.0306, 0.0693],
        [-2.5828, -2.2762, -2.0231, -1.7975, -1.0559, 0.1565, 0.4233, 0.6151, 0.7713],
        [-2.5646, -2.3075, -2.0592, -1.8023, -1.0536, 0.3384, 0.7169, 0.9812, 1.2584],
        [-2.6166, -2.2899, -2.0455, -1.8057, -1.0747, 0.3205, 0.7915, 1.2638, 1.7160],
    ],
    [
        [-3.5568, -3.3264, -3.0734, -2.7710, -1.9186, -1.4540, -1.3435, -1.2565, -1.1517],
        [-2.9965, -2.7786, -2.5986, -2.4044, -1.7981, -1.3213, -1.1967, -1.1045, -1.0027],
        [-2.7673, -2.4943, -2.2823, -2.0959, -1.5495, -1.1285, -1.0365, -0.9505, -0.8456],
        [-2.6929, -2.3864, -2.1939, -1.9918, -1.4241, -0.9693, -0.8582, -0.7654, -0.6769],
        [-2.7458, -2.4226, -2.1924, -1.9446, -1.2756, -0.7000, -0.5699, -0.4569, -0.3534],
        [-2.6250, -2.3393, -2.1406, -1.9376, -1.1980, -0.3038, -0.1415, -0.0393, 0.0707],
        [-2.6410, -2.3502, -2.1300, -1.9319, -1.1567, 0.1918, 0.4410, 0.6028, 0.8155],
        [-2.7350, -2.4146, -2.1601, -1.9366, -1.1933, 0.3619, 0.7800, 1.0473, 1.3263],
        [-2.6991, -2.3969, -2.1560, -1.9551, -1.1812, 0.3579, 0.8025, 1.2076, 1.6099],
    ],
    [
        [-3.6118, -3.3940, -3.2333, -3.0464, -2.4796, -2.0117, -1.9012, -1.7999, -1.6789],
        [-3.1978, -2.9999, -2.8629, -2.6989, -2.1944, -1.7720, -1.6548, -1.5694, -1.4767],
        [-2.9965, -2.7786, -2.5986, -2.4044, -1.7981, -1.3213, -1.1967, -1.1045, -1.0027],
        [-2.9838, -2.7528, -2.5860, -2.3899, -1.6138, -1.0577, -0.9475, -0.8660, -0.7482],
        [-3.0287, -2.7612, -2.5899, -2.3722, -1.3998, -0.7517, -0.6187, -0.5294, -0.4271],
        [-2.9916, -2.7620, -2.5739, -2.3546, -1.2483, -0.3153, -0.1613, -0.0507, 0.0549],
        [-3.0108, -2.8070, -2.5755, -2.3716, -1.2298, 0.1830, 0.4533, 0.6051, 0.8529],
        [-3.0487, -2.7744, -2.6014, -2.3783, -1.2481, 0.3763, 0.7381, 1.0379, 1.3596],
        [-3.0231, -2.7947, -2.6040, -2.3529, -1.2463, 0.4592, 0.9451, 1.2679, 1.7135],
    ],
    [
        [-3.8801, -3.7408, -3.5907, -3.4423, -2.9279, -2.4618, -2.3232, -2.2171, -2.1138],
        [-3.6118, -3.3940, -3.2333, -3.0464, -2.4796, -2.0117, -1.9012, -1.7999, -1.6789],
        [-3.5568, -3.3264, -3.0734, -2.7710, -1.9186, -1.4540, -1.3435, -1.2565, -1.1517],
        [-3.5832, -3.2835, -3.0644, -2.7418, -1.6826, -1.1686, -1.0429, -0.9487, -0.8530],
        [-3.5339, -3.2728, -3.0277, -2.7138, -1.4189, -0.8278, -0.6987, -0.6061, -0.5141],
        [-3.4514, -3.2734, -3.0736, -2.7585, -1.2220, -0.3909, -0.2271, -0.0995, 0.0300],
        [-3.5229, -3.2381, -3.0436, -2.7356, -1.1461, 0.1531, 0.3755, 0.5707, 0.8294],
        [-3.5015, -3.2883, -3.0444, -2.7848, -1.1666, 0.3247, 0.6621, 0.9548, 1.2796],
        [-3.5697, -3.3080, -3.0723, -2.7351, -1.1792, 0.4030, 0.9054, 1.2571, 1.6552],
    ],
];

/// PT quantiles under GLS-bounds detrending.
#[rustfmt::skip]
pub const GLS_BOUNDS_PT: QuantileTable = [
    [
        [3.7329, 4.3272, 5.0275, 6.2701, 25.0127, 126.9241, 185.8996, 249.9369, 329.6487],
        [3.0779, 3.5820, 4.0997, 4.9569, 14.1672, 85.0322, 126.0763, 170.8074, 233.8159],
        [2.3181, 2.9180, 3.5421, 4.2291, 9.5318, 51.9244, 75.7586, 104.8726, 136.7967],
        [2.2607, 2.8744, 3.6076, 4.5029, 10.2850, 48.7581, 76.2625, 104.0359, 143.8003],
        [2.2753, 2.8311, 3.5316, 4.7369, 12.1079, 43.9935, 71.8705, 101.8569, 132.1689],
        [2.0681, 2.7223, 3.4515, 4.5846, 15.4880, 45.9841, 68.1961, 95.4891, 126.6902],
        [2.0449, 2.6607, 3.3139, 4.6199, 17.8004, 59.1199, 75.9899, 95.8279, 129.4267],
        [1.9649, 2.5848, 3.3237, 4.4383, 16.6879, 64.5581, 82.8460, 105.3475, 133.3210],
        [1.8535, 2.4566, 3.1161, 4.2452, 16.1933, 66.6770, 92.6851, 117.4962, 151.2678],
    ],
    [
        [3.8827, 4.3779, 5.0924, 6.0408, 25.0124, 126.6397, 176.2948, 210.6561, 254.4250],
        [2.9907, 3.6098, 4.0923, 4.8433, 14.2929, 80.8001, 115.3340, 144.1401, 183.3902],
        [2.3009, 2.8570, 3.5278, 4.2965, 9.3726, 52.4285, 76.2151, 101.0955, 126.9288],
        [2.3178, 2.9033, 3.5382, 4.5242, 10.3323, 50.0221, 74.1367, 92.6678, 116.5022],
        [2.2005, 2.9362, 3.5890, 4.7658, 12.1637, 48.1022, 72.0364, 91.5770, 110.2568],
        [2.1491, 2.6882, 3.4257, 4.6875, 15.8031, 46.9413, 71.0784, 90.0902, 114.6094],
        [2.1373, 2.6249, 3.4169, 4.6993, 17.4011, 58.3542, 73.1199, 85.9944, 109.0495],
        [1.8456, 2.5923, 3.3346, 4.5827, 16.3344, 68.9696, 87.9001, 101.7836, 117.2756],
        [1.9649, 2.5848, 3.3237, 4.4383, 16.6879, 64.5581, 82.8460, 105.3475, 133.3210],
    ],
    [
        [3.8885, 4.4893, 5.0919, 6.2475, 25.4018, 105.6814, 132.0455, 152.3950, 177.9983],
        [3.0526, 3.5282, 4.1594, 4.8798, 14.3714, 72.4840, 95.5712, 111.7172, 129.1639],
        [2.4332, 2.9824, 3.5963, 4.3148, 9.7495, 49.5558, 63.9298, 77.7374, 88.6400],
        [2.3432, 2.9562, 3.6450, 4.5550, 10.3538, 43.9741, 57.8597, 69.5347, 82.4468],
        [1.9869, 2.7541, 3.4541, 4.6172, 12.0063, 40.5178, 52.8342, 64.2081, 74.5544],
        [2.0976, 2.7386, 3.4007, 4.5483, 15.3601, 42.6877, 53.8088, 63.8618, 77.3848],
        [2.1494, 2.7207, 3.5701, 4.8388, 17.8954, 54.4822, 64.7679, 74.3867, 84.5895],
        [2.1373, 2.6249, 3.4169, 4.6993, 17.4011, 58.3542, 73.1199, 85.9944, 109.0495],
        [2.0449, 2.6607, 3.3139, 4.6199, 17.8004, 59.1199, 75.9899, 95.8279, 129.4267],
    ],
    [
        [3.9852, 4.4429, 5.0033, 6.1482, 24.2003, 63.5551, 74.6824, 83.4822, 96.1231],
        [3.1285, 3.6298, 4.1754, 4.9445, 14.1599, 42.5686, 50.6772, 59.1035, 66.9232],
        [2.4527, 3.0251, 3.5810, 4.2918, 9.2603, 27.5406, 32.7921, 37.8805, 44.7354],
        [2.2064, 2.8923, 3.5539, 4.5569, 10.0514, 24.9920, 30.4748, 35.0727, 41.1417],
        [2.0965, 2.6909, 3.4130, 4.5934, 11.7637, 24.8963, 29.2235, 33.7498, 39.0958],
        [2.2392, 2.8423, 3.5704, 4.9390, 15.0181, 29.7672, 34.5451, 38.4246, 43.7168],
        [2.0976, 2.7386, 3.4007, 4.5483, 15.3601, 42.6877, 53.8088, 63.8618, 77.3848],
        [2.1491, 2.6882, 3.4257, 4.6875, 15.8031, 46.9413, 71.0784, 90.0902, 114.6094],
        [2.0681, 2.7223, 3.4515, 4.5846, 15.4880, 45.9841, 68.1961, 95.4891, 126.6902],
    ],
    [
        [3.8105, 4.4172, 5.1582, 6.3209, 20.0933, 38.1164, 44.1995, 49.6807, 55.6994],
        [3.0610, 3.6780, 4.1318, 4.8763, 12.1326, 26.0194, 30.1931, 33.6453, 38.2169],
        [2.2320, 2.8273, 3.4472, 4.2660, 8.6087, 17.2093, 20.5514, 23.2652, 26.8524],
        [2.3084, 3.0840, 3.6410, 4.6518, 9.5741, 17.5936, 20.0862, 22.6124, 25.4080],
        [2.2776, 2.7656, 3.5574, 4.6857, 11.0784, 19.2603, 22.1749, 24.5882, 27.1104],
        [2.0965, 2.6909, 3.4130, 4.5934, 11.7637, 24.8963, 29.2235, 33.7498, 39.0958],
        [1.9869, 2.7541, 3.4541, 4.6172, 12.0063, 40.5178, 52.8342, 64.2081, 74.5544],
        [2.2005, 2.9362, 3.5890, 4.7658, 12.1637, 48.1022, 72.0364, 91.5770, 110.2568],
        [2.2753, 2.8311, 3.5316, 4.7369, 12.1079, 43.9935, 71.8705, 101.8569, 132.1689],
    ],
    [
        [3.6743, 4.3743, 5.0674, 6.2070, 15.0098, 25.7770, 29.3143, 32.3823, 37.3514],
        [3.1752, 3.6975, 4.1665, 4.8423, 9.7270, 17.8853, 20.4235, 22.8427, 25.3223],
        [2.3333, 2.9994, 3.4836, 4.1639, 7.3730, 12.3282, 14.0638, 15.6480, 17.7949],
        [2.2614, 2.9538, 3.6234, 4.6005, 8.4137, 13.5453, 15.3510, 16.9384, 18.8287],
        [2.3084, 3.0840, 3.6410, 4.6518, 9.5741, 17.5936, 20.0862, 22.6124, 25.4080],
        [2.2064, 2.8923, 3.5539, 4.5569, 10.0514, 24.9920, 30.4748, 35.0727, 41.1417],
        [2.3432, 2.9562, 3.6450, 4.5550, 10.3538, 43.9741, 57.8597, 69.5347, 82.4468],
        [2.3178, 2.9033, 3.5382, 4.5242, 10.3323, 50.0221, 74.1367, 92.6678, 116.5022],
        [2.2607, 2.8744, 3.6076, 4.5029, 10.2850, 48.7581, 76.2625, 104.0359, 143.8003],
    ],
    [
        [3.7522, 4.3060, 5.0170, 6.0840, 11.9800, 18.9676, 21.3722, 23.2120, 25.9300],
        [3.1943, 3.6599, 4.1678, 4.8148, 8.1637, 13.3706, 15.1866, 16.9128, 18.5310],
        [2.2981, 2.7976, 3.2899, 3.8646, 6.5610, 10.3143, 11.5999, 12.7954, 14.2182],
        [2.3333, 2.9994, 3.4836, 4.1639, 7.3730, 12.3282, 14.0638, 15.6480, 17.7949],
        [2.2320, 2.8273, 3.4472, 4.2660, 8.6087, 17.2093, 20.5514, 23.2652, 26.8524],
        [2.4527, 3.0251, 3.5810, 4.2918, 9.2603, 27.5406, 32.7921, 37.8805, 44.7354],
        [2.4332, 2.9824, 3.5963, 4.3148, 9.7495, 49.5558, 63.9298, 77.7374, 88.6400],
        [2.3009, 2.8570, 3.5278, 4.2965, 9.3726, 52.4285, 76.2151, 101.0955, 126.9288],
        [2.3181, 2.9180, 3.5421, 4.2291, 9.5318, 51.9244, 75.7586, 104.8726, 136.7967],
    ],
    [
        [3.8178, 4.3298, 4.7495, 5.3222, 7.8800, 11.4958, 12.6749, 13.9316, 15.3075],
        [3.6106, 4.0782, 4.4632, 5.0103, 7.3614, 10.6646, 11.8528, 13.0305, 14.1623],
        [3.1943, 3.6599, 4.1678, 4.8148, 8.1637, 13.3706, 15.1866, 16.9128, 18.5310],
        [3.1752, 3.6975, 4.1665, 4.8423, 9.7270, 17.8853, 20.4235, 22.8427, 25.3223],
        [3.0610, 3.6780, 4.1318, 4.8763, 12.1326, 26.0194, 30.1931, 33.6453, 38.2169],
        [3.1285, 3.6298, 4.1754, 4.9445, 14.1599, 42.5686, 50.6772, 59.1035, 66.9232],
        [3.0526, 3.5282, 4.1594, 4.8798, 14.3714, 72.4840, 95.5712, 111.7172, 129.1639],
        [2.9907, 3.6098, 4.0923, 4.8433, 14.2929, 80.8001, 115.3340, 144.1401, 183.3902],
        [3.0779, 3.5820, 4.0997, 4.9569, 14.1672, 85.0322, 126.0763, 170.8074, 233.8159],
    ],
    [
        [3.5405, 3.8245, 4.1094, 4.4992, 6.1737, 8.5268, 9.4876, 10.3157, 11.2223],
        [3.8178, 4.3298, 4.7495, 5.3222, 7.8800, 11.4958, 12.6749, 13.9316, 15.3075],
        [3.7522, 4.3060, 5.0170, 6.0840, 11.9800, 18.9676, 21.3722, 23.2120, 25.9300],
        [3.6743, 4.3743, 5.0674, 6.2070, 15.0098, 25.7770, 29.3143, 32.3823, 37.3514],
        [3.8105, 4.4172, 5.1582, 6.3209, 20.0933, 38.1164, 44.1995, 49.6807, 55.6994],
        [3.9852, 4.4429, 5.0033, 6.1482, 24.2003, 63.5551, 74.6824, 83.4822, 96.1231],
        [3.8885, 4.4893, 5.0919, 6.2475, 25.4018, 105.6814, 132.0455, 152.3950, 177.9983],
        [3.8827, 4.3779, 5.0924, 6.0408, 25.0124, 126.6397, 176.2948, 210.6561, 254.4250],
        [3.7329, 4.3272, 5.0275, 6.2701, 25.0127, 126.9241, 185.8996, 249.9369, 329.6487],
    ],
];

/// Quantile table for a detrending method and statistic.
pub fn quantile_table(method: DetrendingMethod, kind: StatisticKind) -> &'static QuantileTable {
    match (method, kind) {
        (DetrendingMethod::Ols, StatisticKind::MzAlpha) => &OLS_MZ_ALPHA,
        (DetrendingMethod::Ols, StatisticKind::Msb) => &OLS_MSB,
        (DetrendingMethod::Ols, StatisticKind::MzT) => &OLS_MZ_T,
        (DetrendingMethod::Ols, StatisticKind::Pt) => &OLS_PT,
        (DetrendingMethod::GlsErs, StatisticKind::MzAlpha) => &GLS_ERS_MZ_ALPHA,
        (DetrendingMethod::GlsErs, StatisticKind::Msb) => &GLS_ERS_MSB,
        (DetrendingMethod::GlsErs, StatisticKind::MzT) => &GLS_ERS_MZ_T,
        (DetrendingMethod::GlsErs, StatisticKind::Pt) => &GLS_ERS_PT,
        (DetrendingMethod::GlsBounds, StatisticKind::MzAlpha) => &GLS_BOUNDS_MZ_ALPHA,
        (DetrendingMethod::GlsBounds, StatisticKind::Msb) => &GLS_BOUNDS_MSB,
        (DetrendingMethod::GlsBounds, StatisticKind::MzT) => &GLS_BOUNDS_MZ_T,
        (DetrendingMethod::GlsBounds, StatisticKind::Pt) => &GLS_BOUNDS_PT,
    }
}
